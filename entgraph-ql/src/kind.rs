//! Scalar kinds for typed predicates.
//!
//! Each kind is a zero-sized marker. A value may only be used with a kind
//! through [`IntoKind`], which is implemented for the kind's native Rust
//! types and nothing else, so `Int8P::eq(300)` or `BoolP::eq("yes")` do
//! not compile.

use crate::value::{Opaque, Valuer as DriverValuer, Value};
use chrono::{DateTime, FixedOffset, Utc};
use smol_str::SmolStr;
use std::fmt;
use std::hash::Hash;

mod sealed {
    pub trait Sealed {}
}

/// A scalar kind of typed predicate.
pub trait Kind: sealed::Sealed + Copy + Default + fmt::Debug + Eq + Hash + 'static {
    /// Kind name, used in diagnostics.
    const NAME: &'static str;
}

/// Kinds supporting `<`, `<=`, `>`, `>=`.
pub trait Ordered: Kind {}

/// Conversion of a native value into a value of kind `K`.
pub trait IntoKind<K: Kind> {
    /// Lower into the kind-erased value.
    fn into_value(self) -> Value;
}

macro_rules! kinds {
    ($($(#[$doc:meta])* $kind:ident = $name:literal $(, $ordered:ident)?;)+) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $kind;

            impl sealed::Sealed for $kind {}

            impl Kind for $kind {
                const NAME: &'static str = $name;
            }

            $(impl $ordered for $kind {})?
        )+
    };
}

kinds! {
    /// `bool`
    Bool = "bool";
    /// `isize`
    Int = "int", Ordered;
    /// `i8`
    Int8 = "int8", Ordered;
    /// `i16`
    Int16 = "int16", Ordered;
    /// `i32`
    Int32 = "int32", Ordered;
    /// `i64`
    Int64 = "int64", Ordered;
    /// `usize`
    Uint = "uint", Ordered;
    /// `u8`
    Uint8 = "uint8", Ordered;
    /// `u16`
    Uint16 = "uint16", Ordered;
    /// `u32`
    Uint32 = "uint32", Ordered;
    /// `u64`
    Uint64 = "uint64", Ordered;
    /// `f32`
    Float32 = "float32", Ordered;
    /// `f64`
    Float64 = "float64", Ordered;
    /// Strings.
    Str = "string", Ordered;
    /// Byte sequences.
    Bytes = "bytes", Ordered;
    /// Timestamps.
    Time = "time", Ordered;
    /// Driver valuers, rendered as `{}`.
    Valuer = "valuer", Ordered;
    /// Any other comparable payload, rendered as `{}`.
    Other = "other", Ordered;
}

macro_rules! into_kind {
    ($kind:ident: $($t:ty => |$v:ident| $lower:expr),+ $(,)?) => {
        $(
            impl IntoKind<$kind> for $t {
                fn into_value(self) -> Value {
                    let $v = self;
                    $lower
                }
            }
        )+
    };
}

into_kind!(Bool: bool => |v| Value::Bool(v));
into_kind!(Int: isize => |v| Value::Int(v as i64));
into_kind!(Int8: i8 => |v| Value::Int(i64::from(v)));
into_kind!(Int16: i16 => |v| Value::Int(i64::from(v)));
into_kind!(Int32: i32 => |v| Value::Int(i64::from(v)));
into_kind!(Int64: i64 => |v| Value::Int(v));
into_kind!(Uint: usize => |v| Value::Uint(v as u64));
into_kind!(Uint8: u8 => |v| Value::Uint(u64::from(v)));
into_kind!(Uint16: u16 => |v| Value::Uint(u64::from(v)));
into_kind!(Uint32: u32 => |v| Value::Uint(u64::from(v)));
into_kind!(Uint64: u64 => |v| Value::Uint(v));
into_kind!(Float32: f32 => |v| Value::Float(f64::from(v)));
into_kind!(Float64: f64 => |v| Value::Float(v));
into_kind!(Str:
    String => |v| Value::String(v),
    &str => |v| Value::String(v.to_string()),
    SmolStr => |v| Value::String(v.to_string()),
);
into_kind!(Bytes:
    Vec<u8> => |v| Value::Bytes(v),
    &[u8] => |v| Value::Bytes(v.to_vec()),
);
into_kind!(Time:
    DateTime<FixedOffset> => |v| Value::Time(v),
    DateTime<Utc> => |v| Value::Time(v.fixed_offset()),
);
into_kind!(Valuer: Opaque => |v| Value::Opaque(v));
into_kind!(Other: Opaque => |v| Value::Opaque(v));

impl<const N: usize> IntoKind<Bytes> for &[u8; N] {
    fn into_value(self) -> Value {
        Value::Bytes(self.to_vec())
    }
}

impl<T: DriverValuer> IntoKind<Valuer> for T {
    fn into_value(self) -> Value {
        Value::Opaque(Opaque::from_valuer(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QlResult;
    use chrono::TimeZone;

    #[derive(Debug, PartialEq)]
    struct Uuid(u128);

    impl DriverValuer for Uuid {
        fn value(&self) -> QlResult<Value> {
            Ok(Value::String(format!("{:032x}", self.0)))
        }
    }

    fn lower<K: Kind>(v: impl IntoKind<K>) -> Value {
        v.into_value()
    }

    #[test]
    fn test_integer_kinds_widen() {
        assert_eq!(lower::<Int8>(-3i8), Value::Int(-3));
        assert_eq!(lower::<Int>(7isize), Value::Int(7));
        assert_eq!(lower::<Uint16>(7u16), Value::Uint(7));
        assert_eq!(lower::<Uint>(7usize), Value::Uint(7));
    }

    #[test]
    fn test_float_kinds() {
        assert_eq!(lower::<Float32>(1.5f32), Value::Float(1.5));
        assert_eq!(lower::<Float64>(0.25), Value::Float(0.25));
    }

    #[test]
    fn test_bytes_and_strings() {
        assert_eq!(lower::<Bytes>(b"test"), Value::Bytes(b"test".to_vec()));
        assert_eq!(lower::<Bytes>(b"test".as_slice()), Value::Bytes(b"test".to_vec()));
        assert_eq!(lower::<Str>("a8m"), Value::String("a8m".into()));
    }

    #[test]
    fn test_time_kind() {
        let t = Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(lower::<Time>(t), Value::Time(t.fixed_offset()));
    }

    #[test]
    fn test_valuer_kind_wraps_opaque() {
        match lower::<Valuer>(Uuid(1)) {
            Value::Opaque(o) => assert!(o.is_valuer()),
            other => panic!("Expected opaque value, got {:?}", other),
        }
        match lower::<Other>(Opaque::new(Uuid(1))) {
            Value::Opaque(o) => assert!(!o.is_valuer()),
            other => panic!("Expected opaque value, got {:?}", other),
        }
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Bool::NAME, "bool");
        assert_eq!(Str::NAME, "string");
        assert_eq!(Uint64::NAME, "uint64");
    }
}
