//! # entgraph
//!
//! Typed predicate expressions for entity-relationship graphs.
//!
//! entgraph provides:
//! - An immutable predicate AST with a canonical string rendering
//! - Field helpers (`field_eq`, `field_in`, `field_contains_fold`, ...)
//! - Kind-safe predicate builders bound to fields after construction
//! - Edge predicates that filter on related entities
//!
//! ## Quick Start
//!
//! ```rust
//! use entgraph::prelude::*;
//!
//! let adult = IntP::gte(18).field("age");
//! let p = and(adult, has_edge_with("pets", [field_eq("name", "pedro")]));
//! assert_eq!(p.to_string(), r#"age >= 18 && has_edge(pets, name == "pedro")"#);
//!
//! // Negation always wraps.
//! assert_eq!(p.negate().negate().to_string(), format!("!(!({}))", p));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Predicate AST, builders and rendering.
pub mod ql {
    pub use entgraph_ql::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use entgraph_ql::prelude::*;
}

// Re-export key types at the crate root
pub use ql::{Expr, Fielder, QlError, QlResult, Value};
