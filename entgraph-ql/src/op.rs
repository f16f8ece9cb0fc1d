//! Operators and call functions.

use crate::error::QlError;
use serde::Serialize;
use smol_str::SmolStr;
use std::fmt;
use std::str::FromStr;

/// A comparison operator of a [`BinaryExpr`](crate::expr::BinaryExpr).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Op {
    /// `==`
    Eq,
    /// `!=`
    Neq,
    /// `>`
    Gt,
    /// `>=`
    Gte,
    /// `<`
    Lt,
    /// `<=`
    Lte,
    /// `in`
    In,
    /// `not in`
    NotIn,
    /// Nil check, rendered as `== nil`.
    IsNil,
    /// Non-nil check, rendered as `!= nil`.
    IsNotNil,
}

impl Op {
    /// The symbol placed between the two operands.
    ///
    /// Nil checks share the equality symbols; the nil operand itself
    /// carries the meaning.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Eq | Self::IsNil => "==",
            Self::Neq | Self::IsNotNil => "!=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::In => "in",
            Self::NotIn => "not in",
        }
    }

    /// Whether this operator is a nil check.
    pub const fn is_nil_check(self) -> bool {
        matches!(self, Self::IsNil | Self::IsNotNil)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Logical operator of an [`NaryExpr`](crate::expr::NaryExpr).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NaryOp {
    /// Conjunction, joined by ` && `.
    And,
    /// Disjunction, joined by ` || `.
    Or,
}

impl NaryOp {
    /// The separator placed between operands.
    pub const fn separator(self) -> &'static str {
        match self {
            Self::And => " && ",
            Self::Or => " || ",
        }
    }
}

impl fmt::Display for NaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::And => "&&",
            Self::Or => "||",
        })
    }
}

/// The function named by a [`CallExpr`](crate::expr::CallExpr).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Func {
    /// `contains(field, "v")`
    Contains,
    /// `contains_fold(field, "v")`
    ContainsFold,
    /// `equal_fold(field, "v")`
    EqualFold,
    /// `has_prefix(field, "v")`
    HasPrefix,
    /// `has_suffix(field, "v")`
    HasSuffix,
    /// `has_edge(edge)` or `has_edge(edge, predicate)`
    HasEdge,
    /// A function emitted by a collaborator outside this crate.
    Custom(SmolStr),
}

impl Func {
    /// The rendered function name.
    pub fn name(&self) -> &str {
        match self {
            Self::Contains => "contains",
            Self::ContainsFold => "contains_fold",
            Self::EqualFold => "equal_fold",
            Self::HasPrefix => "has_prefix",
            Self::HasSuffix => "has_suffix",
            Self::HasEdge => "has_edge",
            Self::Custom(name) => name.as_str(),
        }
    }

    /// Whether this is one of the string functions.
    pub fn is_string_func(&self) -> bool {
        matches!(
            self,
            Self::Contains | Self::ContainsFold | Self::EqualFold | Self::HasPrefix | Self::HasSuffix
        )
    }
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses the built-in function names only; anything else is an
/// [`UnknownFunc`](crate::error::ErrorCode::UnknownFunc) error.
impl FromStr for Func {
    type Err = QlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "contains" => Ok(Self::Contains),
            "contains_fold" => Ok(Self::ContainsFold),
            "equal_fold" => Ok(Self::EqualFold),
            "has_prefix" => Ok(Self::HasPrefix),
            "has_suffix" => Ok(Self::HasSuffix),
            "has_edge" => Ok(Self::HasEdge),
            other => Err(QlError::unknown_func(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_op_symbols() {
        assert_eq!(Op::Eq.symbol(), "==");
        assert_eq!(Op::Neq.symbol(), "!=");
        assert_eq!(Op::Gt.symbol(), ">");
        assert_eq!(Op::Gte.symbol(), ">=");
        assert_eq!(Op::Lt.symbol(), "<");
        assert_eq!(Op::Lte.symbol(), "<=");
        assert_eq!(Op::In.symbol(), "in");
        assert_eq!(Op::NotIn.symbol(), "not in");
        assert_eq!(Op::IsNil.symbol(), "==");
        assert_eq!(Op::IsNotNil.symbol(), "!=");
    }

    #[test]
    fn test_nary_separator() {
        assert_eq!(NaryOp::And.separator(), " && ");
        assert_eq!(NaryOp::Or.separator(), " || ");
    }

    #[test]
    fn test_func_roundtrip_names() {
        for func in [
            Func::Contains,
            Func::ContainsFold,
            Func::EqualFold,
            Func::HasPrefix,
            Func::HasSuffix,
            Func::HasEdge,
        ] {
            assert_eq!(func.name().parse::<Func>().unwrap(), func);
        }
    }

    #[test]
    fn test_unknown_func_rejected() {
        let err = "regex".parse::<Func>().unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownFunc);
    }

    #[test]
    fn test_custom_func_name() {
        assert_eq!(Func::Custom("near".into()).to_string(), "near");
        assert!(!Func::Custom("near".into()).is_string_func());
        assert!(Func::HasPrefix.is_string_func());
    }
}
