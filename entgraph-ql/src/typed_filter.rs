//! Kind-safe predicate builders.
//!
//! A [`TypedP<K>`] is a predicate over a single, not yet named value of
//! kind `K`. Comparisons and combinators build a small kind-local tree;
//! [`Fielder::field`] then lowers it into a generic [`Expr`] against a
//! concrete field. Values of the wrong kind are rejected by the compiler.
//!
//! # Examples
//!
//! ```rust
//! use entgraph_ql::{Fielder, IntP, StringP};
//!
//! let age = IntP::gt(18).and(IntP::lt(65));
//! assert_eq!(age.field("age").to_string(), "age > 18 && age < 65");
//!
//! let name = StringP::eq("a8m").or(StringP::nil()).not();
//! assert_eq!(name.field("name").to_string(), r#"!(name == "a8m" || name == nil)"#);
//! ```

use crate::error::{QlError, QlResult};
use crate::expr::{BinaryExpr, Expr, FieldRef, NaryExpr, UnaryExpr};
use crate::kind::{self, IntoKind, Kind, Ordered};
use crate::op::{NaryOp, Op};
use crate::value::Value;
use std::marker::PhantomData;

/// A predicate value that can be bound to a field name.
pub trait Fielder {
    /// Lower this predicate into the generic AST against field `name`.
    fn field(&self, name: &str) -> Expr;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Node {
    Cmp(Op, Value),
    Nary(NaryOp, Vec<Node>),
    Not(Box<Node>),
}

impl Node {
    fn lower(&self, field: &FieldRef) -> Expr {
        match self {
            Self::Cmp(op, value) => {
                Expr::Binary(BinaryExpr::new(field.clone(), *op, value.clone()))
            }
            Self::Nary(op, nodes) => Expr::Nary(NaryExpr::from_operands(
                *op,
                nodes.iter().map(|n| n.lower(field)).collect(),
            )),
            Self::Not(node) => Expr::Unary(UnaryExpr::new(node.lower(field))),
        }
    }
}

/// A predicate over a value of kind `K`, not yet bound to a field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypedP<K: Kind> {
    node: Node,
    kind: PhantomData<fn() -> K>,
}

impl<K: Kind> TypedP<K> {
    fn new(node: Node) -> Self {
        Self {
            node,
            kind: PhantomData,
        }
    }

    fn cmp(op: Op, value: Value) -> Self {
        Self::new(Node::Cmp(op, value))
    }

    fn combine(op: NaryOp, preds: impl IntoIterator<Item = Self>) -> QlResult<Self> {
        let mut nodes: Vec<Node> = preds.into_iter().map(|p| p.node).collect();
        match nodes.len() {
            0 => Err(QlError::empty_operands(op)),
            1 => Ok(Self::new(nodes.remove(0))),
            _ => Ok(Self::new(Node::Nary(op, nodes))),
        }
    }

    /// `field == v`
    pub fn eq(v: impl IntoKind<K>) -> Self {
        Self::cmp(Op::Eq, v.into_value())
    }

    /// `field != v`
    pub fn neq(v: impl IntoKind<K>) -> Self {
        Self::cmp(Op::Neq, v.into_value())
    }

    /// `field == nil`
    pub fn nil() -> Self {
        Self::cmp(Op::IsNil, Value::Nil)
    }

    /// `field != nil`
    pub fn not_nil() -> Self {
        Self::cmp(Op::IsNotNil, Value::Nil)
    }

    /// `self && other`
    pub fn and(self, other: Self) -> Self {
        Self::new(Node::Nary(NaryOp::And, vec![self.node, other.node]))
    }

    /// `self || other`
    pub fn or(self, other: Self) -> Self {
        Self::new(Node::Nary(NaryOp::Or, vec![self.node, other.node]))
    }

    /// `!(self)`
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Self::new(Node::Not(Box::new(self.node)))
    }

    /// AND over any number of predicates. A single predicate is returned
    /// unchanged; none is an error.
    pub fn all(preds: impl IntoIterator<Item = Self>) -> QlResult<Self> {
        Self::combine(NaryOp::And, preds)
    }

    /// OR over any number of predicates. A single predicate is returned
    /// unchanged; none is an error.
    pub fn any(preds: impl IntoIterator<Item = Self>) -> QlResult<Self> {
        Self::combine(NaryOp::Or, preds)
    }
}

impl<K: Ordered> TypedP<K> {
    /// `field < v`
    pub fn lt(v: impl IntoKind<K>) -> Self {
        Self::cmp(Op::Lt, v.into_value())
    }

    /// `field <= v`
    pub fn lte(v: impl IntoKind<K>) -> Self {
        Self::cmp(Op::Lte, v.into_value())
    }

    /// `field > v`
    pub fn gt(v: impl IntoKind<K>) -> Self {
        Self::cmp(Op::Gt, v.into_value())
    }

    /// `field >= v`
    pub fn gte(v: impl IntoKind<K>) -> Self {
        Self::cmp(Op::Gte, v.into_value())
    }
}

impl<K: Kind> Fielder for TypedP<K> {
    fn field(&self, name: &str) -> Expr {
        tracing::trace!(kind = K::NAME, field = name, "binding typed predicate");
        self.node.lower(&FieldRef::new(name))
    }
}

impl<K: Kind> std::ops::Not for TypedP<K> {
    type Output = Self;

    fn not(self) -> Self {
        TypedP::not(self)
    }
}

/// Predicate over a `bool` field.
pub type BoolP = TypedP<kind::Bool>;
/// Predicate over an `isize` field.
pub type IntP = TypedP<kind::Int>;
/// Predicate over an `i8` field.
pub type Int8P = TypedP<kind::Int8>;
/// Predicate over an `i16` field.
pub type Int16P = TypedP<kind::Int16>;
/// Predicate over an `i32` field.
pub type Int32P = TypedP<kind::Int32>;
/// Predicate over an `i64` field.
pub type Int64P = TypedP<kind::Int64>;
/// Predicate over a `usize` field.
pub type UintP = TypedP<kind::Uint>;
/// Predicate over a `u8` field.
pub type Uint8P = TypedP<kind::Uint8>;
/// Predicate over a `u16` field.
pub type Uint16P = TypedP<kind::Uint16>;
/// Predicate over a `u32` field.
pub type Uint32P = TypedP<kind::Uint32>;
/// Predicate over a `u64` field.
pub type Uint64P = TypedP<kind::Uint64>;
/// Predicate over an `f32` field.
pub type Float32P = TypedP<kind::Float32>;
/// Predicate over an `f64` field.
pub type Float64P = TypedP<kind::Float64>;
/// Predicate over a string field.
pub type StringP = TypedP<kind::Str>;
/// Predicate over a byte-sequence field.
pub type BytesP = TypedP<kind::Bytes>;
/// Predicate over a timestamp field.
pub type TimeP = TypedP<kind::Time>;
/// Predicate over a driver-valuer field.
pub type ValueP = TypedP<kind::Valuer>;
/// Predicate over a field of any other comparable type.
pub type OtherP = TypedP<kind::Other>;
