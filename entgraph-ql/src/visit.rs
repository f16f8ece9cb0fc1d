//! Read-only traversal of predicate trees.
//!
//! Consumers such as SQL compilers and privacy rules can implement
//! [`Visitor`] and override only the hooks they care about; the default
//! methods perform the recursion.
//!
//! Predicates nested in `has_edge(edge, p)` apply to the related entity,
//! not the one being filtered. [`Visitor::visit_edge`] receives them
//! separately so a visitor can decide whether to descend.

use crate::expr::{Arg, CallExpr, EdgeRef, Expr, FieldName, FieldRef, Operand};
use crate::op::Func;
use crate::value::Value;
use indexmap::IndexSet;

/// Hooks called while walking an [`Expr`].
pub trait Visitor {
    /// Visit a predicate node. The default walks its children.
    fn visit_expr(&mut self, expr: &Expr) {
        walk_expr(self, expr);
    }

    /// Visit a field reference of the current entity.
    fn visit_field(&mut self, _field: &FieldRef) {}

    /// Visit a literal value.
    fn visit_value(&mut self, _value: &Value) {}

    /// Visit an edge traversal. The default descends into `nested`.
    fn visit_edge(&mut self, _edge: &EdgeRef, nested: Option<&Expr>) {
        if let Some(nested) = nested {
            self.visit_expr(nested);
        }
    }

    /// Visit a call other than `has_edge`. The default visits its
    /// arguments.
    fn visit_call(&mut self, call: &CallExpr) {
        for arg in call.args() {
            walk_arg(self, arg);
        }
    }
}

/// Visit the children of `expr`.
pub fn walk_expr<V: Visitor + ?Sized>(visitor: &mut V, expr: &Expr) {
    match expr {
        Expr::Field(field) => visitor.visit_field(field),
        Expr::Binary(binary) => {
            visitor.visit_field(binary.left());
            match binary.right() {
                Operand::Field(field) => visitor.visit_field(field),
                Operand::Value(value) => visitor.visit_value(value),
            }
        }
        Expr::Unary(unary) => visitor.visit_expr(unary.operand()),
        Expr::Nary(nary) => {
            for operand in nary.operands() {
                visitor.visit_expr(operand);
            }
        }
        Expr::Call(call) => match (call.func(), call.args()) {
            (Func::HasEdge, [Arg::Edge(edge)]) => visitor.visit_edge(edge, None),
            (Func::HasEdge, [Arg::Edge(edge), Arg::Expr(nested)]) => {
                visitor.visit_edge(edge, Some(nested))
            }
            _ => visitor.visit_call(call),
        },
    }
}

fn walk_arg<V: Visitor + ?Sized>(visitor: &mut V, arg: &Arg) {
    match arg {
        Arg::Field(field) => visitor.visit_field(field),
        Arg::Edge(edge) => visitor.visit_edge(edge, None),
        Arg::Value(value) => visitor.visit_value(value),
        Arg::Expr(expr) => visitor.visit_expr(expr),
    }
}

struct Nodes<F>(F);

impl<F: FnMut(&Expr)> Visitor for Nodes<F> {
    fn visit_expr(&mut self, expr: &Expr) {
        (self.0)(expr);
        walk_expr(self, expr);
    }
}

#[derive(Default)]
struct Fields(IndexSet<FieldName>);

impl Visitor for Fields {
    fn visit_field(&mut self, field: &FieldRef) {
        self.0.insert(field.name().into());
    }

    fn visit_edge(&mut self, _edge: &EdgeRef, _nested: Option<&Expr>) {}
}

#[derive(Default)]
struct Edges(IndexSet<FieldName>);

impl Visitor for Edges {
    fn visit_edge(&mut self, edge: &EdgeRef, _nested: Option<&Expr>) {
        self.0.insert(edge.name().into());
    }
}

impl Expr {
    /// Call `f` on every predicate node, pre-order, including predicates
    /// nested in edge traversals.
    pub fn walk(&self, f: impl FnMut(&Expr)) {
        Nodes(f).visit_expr(self);
    }

    /// Fields of the filtered entity referenced by this predicate, in
    /// first-seen order. Fields inside edge traversals are excluded.
    pub fn fields(&self) -> IndexSet<FieldName> {
        let mut fields = Fields::default();
        fields.visit_expr(self);
        fields.0
    }

    /// Edges traversed directly from the filtered entity, in first-seen
    /// order.
    pub fn edges(&self) -> IndexSet<FieldName> {
        let mut edges = Edges::default();
        edges.visit_expr(self);
        edges.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::{has_edge, has_edge_with};
    use crate::expr::{and, not, or};
    use crate::field::{f, field_contains, field_eq, field_gt, lt};

    #[test]
    fn test_walk_visits_every_node() {
        let p = and(
            field_eq("name", "a8m"),
            has_edge_with("pets", [not(field_gt("age", 1))]),
        );
        let mut rendered = Vec::new();
        p.walk(|e| rendered.push(e.to_string()));
        assert_eq!(
            rendered,
            vec![
                r#"name == "a8m" && has_edge(pets, !(age > 1))"#.to_string(),
                r#"name == "a8m""#.to_string(),
                "has_edge(pets, !(age > 1))".to_string(),
                "!(age > 1)".to_string(),
                "age > 1".to_string(),
            ]
        );
    }

    #[test]
    fn test_fields_exclude_edge_scope() {
        let p = or(
            and(field_eq("name", "a8m"), lt(f("created_at"), f("updated_at"))),
            and(
                field_contains("name", "a"),
                has_edge_with("pets", [field_eq("owner_id", 1)]),
            ),
        );
        let fields: Vec<_> = p.fields().into_iter().collect();
        assert_eq!(fields, vec!["name", "created_at", "updated_at"]);
    }

    #[test]
    fn test_edges_top_level_only() {
        let p = and(
            has_edge("owner"),
            has_edge_with("groups", [has_edge("admins")]),
        );
        let edges: Vec<_> = p.edges().into_iter().collect();
        assert_eq!(edges, vec!["owner", "groups"]);
    }

    #[test]
    fn test_custom_visitor_counts_values() {
        #[derive(Default)]
        struct Values(usize);

        impl Visitor for Values {
            fn visit_value(&mut self, _value: &Value) {
                self.0 += 1;
            }
        }

        let p = and(
            field_eq("a", 1),
            has_edge_with("pets", [field_eq("b", 2), field_contains("c", "x")]),
        );
        let mut values = Values::default();
        values.visit_expr(&p);
        assert_eq!(values.0, 3);
    }
}
