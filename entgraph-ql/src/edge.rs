//! Relationship predicates.
//!
//! `has_edge_with` nests predicates evaluated against the related entity,
//! and may itself be nested, which expresses multi-hop filters without
//! joins:
//!
//! ```rust
//! use entgraph_ql::{field_eq, has_edge_with, not};
//!
//! let p = has_edge_with("groups", [has_edge_with("admins", [not(field_eq("name", "a8m"))])]);
//! assert_eq!(p.to_string(), r#"has_edge(groups, has_edge(admins, !(name == "a8m")))"#);
//! ```

use crate::expr::{Arg, CallExpr, EdgeRef, Expr, FieldName, nest};
use crate::op::{Func, NaryOp};

/// `has_edge(name)`: the entity has at least one related entity over the
/// edge.
pub fn has_edge(name: impl Into<FieldName>) -> Expr {
    Expr::Call(CallExpr::new(Func::HasEdge, vec![Arg::Edge(EdgeRef::new(name))]))
}

/// `has_edge(name, p)`: the entity has a related entity matching all of
/// `preds`.
///
/// The predicates are combined with an implicit AND (a single predicate is
/// nested as is). With no predicates this is plain [`has_edge`].
pub fn has_edge_with(name: impl Into<FieldName>, preds: impl IntoIterator<Item = Expr>) -> Expr {
    let edge = EdgeRef::new(name);
    let preds: Vec<Expr> = preds.into_iter().collect();
    crate::ql_trace!(edge = %edge, predicates = preds.len(), "building edge traversal predicate");

    let mut args = vec![Arg::Edge(edge)];
    if let Some(nested) = nest(NaryOp::And, preds) {
        args.push(Arg::Expr(nested));
    }
    Expr::Call(CallExpr::new(Func::HasEdge, args))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::not;
    use crate::field::{field_eq, field_gt, field_has_prefix};
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_has_edge() {
        assert_eq!(has_edge("owner").to_string(), "has_edge(owner)");
    }

    #[test]
    fn test_has_edge_with_single() {
        let p = has_edge_with("pets", [field_eq("name", "pedro")]);
        assert_eq!(p.to_string(), r#"has_edge(pets, name == "pedro")"#);
    }

    #[test]
    fn test_has_edge_with_implicit_and() {
        let p = has_edge_with("pets", [field_eq("name", "pedro"), field_gt("age", 1)]);
        assert_eq!(p.to_string(), r#"has_edge(pets, name == "pedro" && age > 1)"#);

        let p = has_edge_with(
            "pets",
            [field_eq("name", "pedro"), field_gt("age", 1), field_has_prefix("kind", "d")],
        );
        assert_eq!(
            p.to_string(),
            r#"has_edge(pets, (name == "pedro" && age > 1 && has_prefix(kind, "d")))"#
        );
    }

    #[test]
    fn test_has_edge_with_nested() {
        let p = has_edge_with("groups", [has_edge_with("admins", [not(field_eq("name", "a8m"))])]);
        assert_snapshot!(p.to_string(), @r#"has_edge(groups, has_edge(admins, !(name == "a8m")))"#);
    }

    #[test]
    fn test_has_edge_with_deep_traversal() {
        let p = has_edge_with(
            "owner",
            [has_edge_with("groups", [field_has_prefix("name", "ent"), has_edge("admins")])],
        );
        assert_snapshot!(p.to_string(), @r#"has_edge(owner, has_edge(groups, has_prefix(name, "ent") && has_edge(admins)))"#);
    }

    #[test]
    fn test_has_edge_with_no_predicates() {
        assert_eq!(has_edge_with("owner", Vec::new()), has_edge("owner"));
    }

    #[test]
    fn test_edge_arg_shape() {
        match has_edge_with("owner", [field_eq("name", "a8m")]) {
            Expr::Call(call) => {
                assert_eq!(call.func(), &Func::HasEdge);
                assert!(matches!(&call.args()[0], Arg::Edge(e) if e.name() == "owner"));
                assert!(matches!(&call.args()[1], Arg::Expr(Expr::Binary(_))));
            }
            _ => panic!("Expected Call expression"),
        }
    }
}
