//! # entgraph-ql
//!
//! Typed predicate expressions for the entgraph toolkit.
//!
//! Predicates are immutable trees ([`Expr`]) describing filters over
//! entities and their relationships. They are built by generated code and
//! by hand, then consumed by query compilers, graph traversals and privacy
//! rules. Every tree has a canonical, deterministic string rendering.
//!
//! ## Field Predicates
//!
//! ```rust
//! use entgraph_ql::{and, field_eq, field_gt, field_in, not, or};
//!
//! let p = and(field_eq("name", "a8m"), field_gt("age", 30));
//! assert_eq!(p.to_string(), r#"name == "a8m" && age > 30"#);
//!
//! let p = or(field_in("org", ["fb", "ent"]), not(field_eq("admin", true)));
//! assert_eq!(p.to_string(), r#"org in ["fb","ent"] || !(admin == true)"#);
//! ```
//!
//! ## Typed Predicates
//!
//! Typed builders check value kinds at compile time and are bound to a
//! field name afterwards:
//!
//! ```rust
//! use entgraph_ql::{Fielder, IntP, StringP};
//!
//! let p = IntP::gte(18).and(IntP::lt(65));
//! assert_eq!(p.field("age").to_string(), "age >= 18 && age < 65");
//!
//! let p = StringP::eq("a8m").not();
//! assert_eq!(p.field("name").to_string(), r#"!(name == "a8m")"#);
//! ```
//!
//! ## Edges
//!
//! ```rust
//! use entgraph_ql::{field_eq, has_edge, has_edge_with};
//!
//! assert_eq!(has_edge("owner").to_string(), "has_edge(owner)");
//! let p = has_edge_with("pets", [field_eq("name", "pedro")]);
//! assert_eq!(p.to_string(), r#"has_edge(pets, name == "pedro")"#);
//! ```
//!
//! ## Macros
//!
//! ```rust
//! use entgraph_ql::{and, pred};
//!
//! let p = and!(pred!(active == true), pred!(email has_suffix ".com"));
//! assert_eq!(p.to_string(), r#"active == true && has_suffix(email, ".com")"#);
//! ```

pub mod logging;
#[macro_use]
pub mod macros;
pub mod edge;
pub mod error;
pub mod expr;
pub mod field;
pub mod kind;
pub mod op;
pub mod typed_filter;
pub mod value;
pub mod visit;

pub use edge::{has_edge, has_edge_with};
pub use error::{ErrorCode, QlError, QlResult};
pub use expr::{
    Arg, BinaryExpr, CallExpr, EdgeRef, Expr, FieldName, FieldRef, NaryExpr, Operand, UnaryExpr,
    and, and_all, not, or, or_all,
};
pub use field::{
    eq, f, field_contains, field_contains_fold, field_eq, field_equal_fold, field_gt, field_gte,
    field_has_prefix, field_has_suffix, field_in, field_lt, field_lte, field_neq, field_nil,
    field_not_in, field_not_nil, gt, gte, lt, lte, neq,
};
pub use kind::{IntoKind, Kind, Ordered};
pub use op::{Func, NaryOp, Op};
pub use typed_filter::{
    BoolP, BytesP, Fielder, Float32P, Float64P, Int8P, Int16P, Int32P, Int64P, IntP, OtherP,
    StringP, TimeP, TypedP, Uint8P, Uint16P, Uint32P, Uint64P, UintP, ValueP,
};
pub use value::{Opaque, Valuer, Value};
pub use visit::{Visitor, walk_expr};

pub use logging::{init as init_logging, init_debug as init_debug_logging, is_debug_enabled};

// Used by the exported macros.
#[doc(hidden)]
pub use expr::__nary;
#[doc(hidden)]
pub use tracing as __tracing;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::edge::{has_edge, has_edge_with};
    pub use crate::error::{QlError, QlResult};
    pub use crate::expr::{Expr, FieldRef, and_all, or_all};
    pub use crate::field::*;
    pub use crate::typed_filter::*;
    pub use crate::value::{Opaque, Valuer, Value};
    pub use crate::visit::Visitor;
    // Both the functions and the macros.
    pub use crate::{and, not, or, pred};
}
