//! Predicate construction macros.
//!
//! # Examples
//!
//! ```rust
//! use entgraph_ql::{and, not, or, pred};
//!
//! let p = and!(
//!     pred!(active == true),
//!     or!(pred!(role == "admin"), pred!(role == "owner")),
//!     not!(pred!(deleted_at is not nil)),
//! );
//! assert_eq!(
//!     p.to_string(),
//!     r#"(active == true && role == "admin" || role == "owner" && !(deleted_at != nil))"#
//! );
//! ```

/// Build a single field predicate.
///
/// # Syntax
///
/// - `pred!(field == value)`, and likewise `!=`, `>`, `>=`, `<`, `<=`
/// - `pred!(field is nil)` / `pred!(field is not nil)`
/// - `pred!(field in [v1, v2, ...])` / `pred!(field not in [v1, v2, ...])`
/// - `pred!(field contains "v")`, `contains_fold`, `equal_fold`,
///   `has_prefix`, `has_suffix`
///
/// # Examples
///
/// ```rust
/// use entgraph_ql::pred;
///
/// assert_eq!(pred!(age >= 18).to_string(), "age >= 18");
/// assert_eq!(pred!(email has_suffix ".com").to_string(), r#"has_suffix(email, ".com")"#);
/// assert_eq!(pred!(status in ["active", "pending"]).to_string(), r#"status in ["active","pending"]"#);
/// ```
#[macro_export]
macro_rules! pred {
    ($field:ident == $value:expr) => {
        $crate::field_eq(stringify!($field), $value)
    };
    ($field:ident != $value:expr) => {
        $crate::field_neq(stringify!($field), $value)
    };
    ($field:ident > $value:expr) => {
        $crate::field_gt(stringify!($field), $value)
    };
    ($field:ident >= $value:expr) => {
        $crate::field_gte(stringify!($field), $value)
    };
    ($field:ident < $value:expr) => {
        $crate::field_lt(stringify!($field), $value)
    };
    ($field:ident <= $value:expr) => {
        $crate::field_lte(stringify!($field), $value)
    };
    ($field:ident is nil) => {
        $crate::field_nil(stringify!($field))
    };
    ($field:ident is not nil) => {
        $crate::field_not_nil(stringify!($field))
    };
    ($field:ident in [$($value:expr),* $(,)?]) => {{
        let values: ::std::vec::Vec<$crate::Value> = ::std::vec![$($crate::Value::from($value)),*];
        $crate::field_in(stringify!($field), values)
    }};
    ($field:ident not in [$($value:expr),* $(,)?]) => {{
        let values: ::std::vec::Vec<$crate::Value> = ::std::vec![$($crate::Value::from($value)),*];
        $crate::field_not_in(stringify!($field), values)
    }};
    ($field:ident contains $value:expr) => {
        $crate::field_contains(stringify!($field), $value)
    };
    ($field:ident contains_fold $value:expr) => {
        $crate::field_contains_fold(stringify!($field), $value)
    };
    ($field:ident equal_fold $value:expr) => {
        $crate::field_equal_fold(stringify!($field), $value)
    };
    ($field:ident has_prefix $value:expr) => {
        $crate::field_has_prefix(stringify!($field), $value)
    };
    ($field:ident has_suffix $value:expr) => {
        $crate::field_has_suffix(stringify!($field), $value)
    };
}

/// Combine two or more predicates with AND.
///
/// Two operands build the same node as [`and`](crate::and()); more are
/// grouped into one n-ary node.
#[macro_export]
macro_rules! and {
    ($a:expr, $b:expr $(,)?) => {
        $crate::and($a, $b)
    };
    ($a:expr, $($rest:expr),+ $(,)?) => {
        $crate::__nary($crate::NaryOp::And, $a, ::std::vec![$($rest),+])
    };
}

/// Combine two or more predicates with OR.
#[macro_export]
macro_rules! or {
    ($a:expr, $b:expr $(,)?) => {
        $crate::or($a, $b)
    };
    ($a:expr, $($rest:expr),+ $(,)?) => {
        $crate::__nary($crate::NaryOp::Or, $a, ::std::vec![$($rest),+])
    };
}

/// Negate a predicate.
#[macro_export]
macro_rules! not {
    ($pred:expr $(,)?) => {
        $crate::not($pred)
    };
}

#[cfg(test)]
mod tests {
    use crate::expr::{Expr, and_all};
    use crate::field::{field_eq, field_in, field_nil};
    use crate::op::{Func, Op};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pred_comparisons() {
        assert_eq!(pred!(id == 42), field_eq("id", 42));
        assert_eq!(pred!(status != "deleted").to_string(), r#"status != "deleted""#);
        assert_eq!(pred!(age > 18).to_string(), "age > 18");
        assert_eq!(pred!(score >= 100).to_string(), "score >= 100");
        assert_eq!(pred!(price < 50).to_string(), "price < 50");
        assert_eq!(pred!(quantity <= 10).to_string(), "quantity <= 10");
    }

    #[test]
    fn test_pred_nil_checks() {
        assert_eq!(pred!(deleted_at is nil), field_nil("deleted_at"));
        match pred!(verified_at is not nil) {
            Expr::Binary(b) => {
                assert_eq!(b.left().name(), "verified_at");
                assert_eq!(b.op(), Op::IsNotNil);
            }
            _ => panic!("Expected Binary expression"),
        }
    }

    #[test]
    fn test_pred_membership() {
        assert_eq!(pred!(org in ["fb", "ent"]), field_in("org", ["fb", "ent"]));
        assert_eq!(pred!(role not in [1, 2,]).to_string(), "role not in [1,2]");
        assert_eq!(pred!(tags in []).to_string(), "tags in []");
    }

    #[test]
    fn test_pred_string_calls() {
        assert_eq!(pred!(email contains "@").to_string(), r#"contains(email, "@")"#);
        assert_eq!(pred!(name contains_fold "A8M").to_string(), r#"contains_fold(name, "A8M")"#);
        assert_eq!(pred!(name equal_fold "a8m").to_string(), r#"equal_fold(name, "a8m")"#);
        assert_eq!(pred!(name has_prefix "a").to_string(), r#"has_prefix(name, "a")"#);
        match pred!(name has_suffix "m") {
            Expr::Call(call) => assert_eq!(call.func(), &Func::HasSuffix),
            _ => panic!("Expected Call expression"),
        }
    }

    #[test]
    fn test_and_or_macros() {
        let p = and!(pred!(a == 1), pred!(b == 2));
        assert_eq!(p, crate::expr::and(field_eq("a", 1), field_eq("b", 2)));

        let p = or!(pred!(a == 1), pred!(b == 2), pred!(c == 3));
        assert_eq!(p.to_string(), "(a == 1 || b == 2 || c == 3)");

        let p = and!(pred!(a == 1), pred!(b == 2), pred!(c == 3),);
        let expected = and_all([field_eq("a", 1), field_eq("b", 2), field_eq("c", 3)]).unwrap();
        assert_eq!(p, expected);
    }

    #[test]
    fn test_not_macro() {
        let p = not!(pred!(deleted == true));
        assert_eq!(p.to_string(), "!(deleted == true)");
        assert_eq!(not!(p.clone()).to_string(), "!(!(deleted == true))");
    }
}
