//! The predicate AST and its canonical rendering.
//!
//! Every predicate is an [`Expr`], one of five node shapes:
//!
//! - [`Expr::Field`]: a bare field reference
//! - [`Expr::Binary`]: `field op operand`
//! - [`Expr::Unary`]: `!(x)`
//! - [`Expr::Nary`]: operands joined by ` && ` or ` || `
//! - [`Expr::Call`]: `name(arg, ...)`
//!
//! Nodes are never mutated after construction: combinators and
//! [`Expr::negate`] return new trees. `Display` is the canonical
//! rendering:
//!
//! ```rust
//! use entgraph_ql::{and, field_eq, field_gt, or};
//!
//! let p = and(field_eq("name", "a8m"), field_gt("age", 30));
//! assert_eq!(p.to_string(), r#"name == "a8m" && age > 30"#);
//!
//! // Negation wraps; it never rewrites the operand.
//! let p = or(field_eq("a", 1), field_eq("b", 2)).negate();
//! assert_eq!(p.to_string(), "!(a == 1 || b == 2)");
//! ```

use crate::error::{QlError, QlResult};
use crate::op::{Func, NaryOp, Op};
use crate::value::Value;
use serde::Serialize;
use smol_str::SmolStr;
use std::fmt;

/// A field name as supplied by the schema layer.
pub type FieldName = SmolStr;

/// A reference to a field of the entity being filtered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FieldRef(FieldName);

impl FieldRef {
    /// Create a field reference.
    pub fn new(name: impl Into<FieldName>) -> Self {
        Self(name.into())
    }

    /// The field name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A reference to an edge (relationship) of the entity being filtered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EdgeRef(FieldName);

impl EdgeRef {
    /// Create an edge reference.
    pub fn new(name: impl Into<FieldName>) -> Self {
        Self(name.into())
    }

    /// The edge name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EdgeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The right-hand side of a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Operand {
    /// Another field of the same entity.
    Field(FieldRef),
    /// A literal value.
    Value(Value),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(field) => field.fmt(f),
            Self::Value(value) => value.fmt(f),
        }
    }
}

impl From<FieldRef> for Operand {
    fn from(v: FieldRef) -> Self {
        Self::Field(v)
    }
}

impl From<Value> for Operand {
    fn from(v: Value) -> Self {
        Self::Value(v)
    }
}

/// A comparison between a field and an operand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BinaryExpr {
    left: FieldRef,
    op: Op,
    right: Operand,
}

impl BinaryExpr {
    /// Create a comparison.
    pub fn new(left: FieldRef, op: Op, right: impl Into<Operand>) -> Self {
        Self {
            left,
            op,
            right: right.into(),
        }
    }

    /// The compared field.
    pub fn left(&self) -> &FieldRef {
        &self.left
    }

    /// The comparison operator.
    pub fn op(&self) -> Op {
        self.op
    }

    /// The right-hand operand.
    pub fn right(&self) -> &Operand {
        &self.right
    }
}

impl fmt::Display for BinaryExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.op, self.right)
    }
}

/// Logical negation of a predicate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct UnaryExpr {
    operand: Box<Expr>,
}

impl UnaryExpr {
    /// Negate `operand`.
    pub fn new(operand: Expr) -> Self {
        Self {
            operand: Box::new(operand),
        }
    }

    /// The negated predicate.
    pub fn operand(&self) -> &Expr {
        &self.operand
    }
}

impl fmt::Display for UnaryExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "!({})", self.operand)
    }
}

/// Conjunction or disjunction of one or more predicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NaryExpr {
    op: NaryOp,
    operands: Vec<Expr>,
}

impl NaryExpr {
    /// Combine `operands` with `op`.
    ///
    /// Fails with [`EmptyOperands`](crate::error::ErrorCode::EmptyOperands)
    /// when `operands` is empty.
    pub fn new(op: NaryOp, operands: Vec<Expr>) -> QlResult<Self> {
        if operands.is_empty() {
            return Err(QlError::empty_operands(op));
        }
        Ok(Self { op, operands })
    }

    /// Callers guarantee `operands` is non-empty.
    pub(crate) fn from_operands(op: NaryOp, operands: Vec<Expr>) -> Self {
        debug_assert!(!operands.is_empty());
        Self { op, operands }
    }

    /// The logical operator.
    pub fn op(&self) -> NaryOp {
        self.op
    }

    /// The operands, in construction order. Never empty.
    pub fn operands(&self) -> &[Expr] {
        &self.operands
    }
}

impl fmt::Display for NaryExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grouped = self.operands.len() > 2;
        if grouped {
            f.write_str("(")?;
        }
        for (i, x) in self.operands.iter().enumerate() {
            if i > 0 {
                f.write_str(self.op.separator())?;
            }
            write!(f, "{}", x)?;
        }
        if grouped {
            f.write_str(")")?;
        }
        Ok(())
    }
}

/// An argument of a [`CallExpr`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Arg {
    /// A field identifier, rendered bare.
    Field(FieldRef),
    /// An edge identifier, rendered bare.
    Edge(EdgeRef),
    /// A literal, rendered with the value rules.
    Value(Value),
    /// A nested predicate.
    Expr(Expr),
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(v) => v.fmt(f),
            Self::Edge(v) => v.fmt(f),
            Self::Value(v) => v.fmt(f),
            Self::Expr(v) => v.fmt(f),
        }
    }
}

/// A named function-like test.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CallExpr {
    func: Func,
    args: Vec<Arg>,
}

impl CallExpr {
    /// Create a call.
    pub fn new(func: Func, args: Vec<Arg>) -> Self {
        Self { func, args }
    }

    /// The called function.
    pub fn func(&self) -> &Func {
        &self.func
    }

    /// The arguments, in order.
    pub fn args(&self) -> &[Arg] {
        &self.args
    }
}

impl fmt::Display for CallExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.func)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", arg)?;
        }
        f.write_str(")")
    }
}

/// A predicate node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Expr {
    /// A bare field reference.
    Field(FieldRef),
    /// A comparison.
    Binary(BinaryExpr),
    /// A negation.
    Unary(UnaryExpr),
    /// A conjunction or disjunction.
    Nary(NaryExpr),
    /// A function call.
    Call(CallExpr),
}

impl Expr {
    /// Negate this predicate.
    ///
    /// Negation always wraps; it never rewrites the operand, so negating
    /// twice yields `!(!(x))`.
    pub fn negate(&self) -> Expr {
        Expr::Unary(UnaryExpr::new(self.clone()))
    }

    /// Combine with another predicate using AND.
    pub fn and(self, other: Expr) -> Expr {
        and(self, other)
    }

    /// Combine with another predicate using OR.
    pub fn or(self, other: Expr) -> Expr {
        or(self, other)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(v) => v.fmt(f),
            Self::Binary(v) => v.fmt(f),
            Self::Unary(v) => v.fmt(f),
            Self::Nary(v) => v.fmt(f),
            Self::Call(v) => v.fmt(f),
        }
    }
}

impl std::ops::Not for Expr {
    type Output = Expr;

    fn not(self) -> Expr {
        not(self)
    }
}

impl From<FieldRef> for Expr {
    fn from(v: FieldRef) -> Self {
        Self::Field(v)
    }
}

impl From<BinaryExpr> for Expr {
    fn from(v: BinaryExpr) -> Self {
        Self::Binary(v)
    }
}

impl From<UnaryExpr> for Expr {
    fn from(v: UnaryExpr) -> Self {
        Self::Unary(v)
    }
}

impl From<NaryExpr> for Expr {
    fn from(v: NaryExpr) -> Self {
        Self::Nary(v)
    }
}

impl From<CallExpr> for Expr {
    fn from(v: CallExpr) -> Self {
        Self::Call(v)
    }
}

/// `x && y`
pub fn and(x: Expr, y: Expr) -> Expr {
    Expr::Nary(NaryExpr::from_operands(NaryOp::And, vec![x, y]))
}

/// `x || y`
pub fn or(x: Expr, y: Expr) -> Expr {
    Expr::Nary(NaryExpr::from_operands(NaryOp::Or, vec![x, y]))
}

/// `!(x)`
pub fn not(x: Expr) -> Expr {
    Expr::Unary(UnaryExpr::new(x))
}

/// AND over any number of predicates.
///
/// A single predicate is returned unchanged; an empty input is an
/// [`EmptyOperands`](crate::error::ErrorCode::EmptyOperands) error.
pub fn and_all(preds: impl IntoIterator<Item = Expr>) -> QlResult<Expr> {
    combine(NaryOp::And, preds.into_iter().collect())
}

/// OR over any number of predicates.
///
/// Same operand policy as [`and_all`].
pub fn or_all(preds: impl IntoIterator<Item = Expr>) -> QlResult<Expr> {
    combine(NaryOp::Or, preds.into_iter().collect())
}

pub(crate) fn combine(op: NaryOp, operands: Vec<Expr>) -> QlResult<Expr> {
    nest(op, operands).ok_or_else(|| {
        let err = QlError::empty_operands(op);
        crate::ql_debug!(op = %op, error = %err, "rejected n-ary predicate");
        err
    })
}

/// Support for the `and!` and `or!` macros; the leading operand keeps the
/// node non-empty.
#[doc(hidden)]
pub fn __nary(op: NaryOp, first: Expr, rest: Vec<Expr>) -> Expr {
    let mut operands = Vec::with_capacity(rest.len() + 1);
    operands.push(first);
    operands.extend(rest);
    Expr::Nary(NaryExpr::from_operands(op, operands))
}

/// Like [`combine`], but an empty operand list yields `None`.
pub(crate) fn nest(op: NaryOp, mut operands: Vec<Expr>) -> Option<Expr> {
    match operands.len() {
        0 => None,
        1 => operands.pop(),
        _ => Some(Expr::Nary(NaryExpr::from_operands(op, operands))),
    }
}
