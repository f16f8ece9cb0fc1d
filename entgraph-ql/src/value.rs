//! Literal values carried by predicate trees.
//!
//! A [`Value`] is the kind-erased form of every literal a predicate can
//! compare against. Its `Display` output is the canonical rendering used
//! by [`Expr`](crate::expr::Expr):
//!
//! | Value | Rendering |
//! |-------|-----------|
//! | `Nil` | `nil` |
//! | `Bool`, `Int`, `Uint`, `Float` | bare (`true`, `-3`, `1.5`) |
//! | `String` | double-quoted, escaped (`"a8m"`) |
//! | `Bytes` | base64, double-quoted (`"dGVzdA=="`) |
//! | `Time` | RFC3339, double-quoted (`"2021-05-01T10:00:00Z"`) |
//! | `List` | `[v0,v1,...]` |
//! | `Opaque` | `{}` |

use crate::error::QlResult;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use smol_str::SmolStr;
use std::any::{Any, TypeId};
use std::fmt::{self, Write as _};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A literal value in a predicate.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent value, compared against by nil checks.
    Nil,
    /// Boolean value.
    Bool(bool),
    /// Signed integer value.
    Int(i64),
    /// Unsigned integer value.
    Uint(u64),
    /// Float value.
    Float(f64),
    /// String value.
    String(String),
    /// Byte sequence.
    Bytes(#[serde(serialize_with = "base64_bytes::serialize")] Vec<u8>),
    /// Timestamp with its original offset.
    Time(DateTime<FixedOffset>),
    /// List of values, used by `in` / `not in`.
    List(Vec<Value>),
    /// A payload that is not structurally printable.
    Opaque(Opaque),
}

impl Value {
    /// Build a byte-sequence value.
    pub fn bytes(v: impl Into<Vec<u8>>) -> Self {
        Self::Bytes(v.into())
    }

    /// Build a list value.
    pub fn list<T: Into<Value>>(values: impl IntoIterator<Item = T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    /// Check if this is a nil value.
    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Short name of the variant, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Uint(_) => "uint",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Bytes(_) => "bytes",
            Self::Time(_) => "time",
            Self::List(_) => "list",
            Self::Opaque(_) => "opaque",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("nil"),
            Self::Bool(v) => write!(f, "{}", v),
            Self::Int(v) => write!(f, "{}", v),
            Self::Uint(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::String(v) => write_quoted(f, v),
            Self::Bytes(v) => write!(f, "\"{}\"", STANDARD.encode(v)),
            Self::Time(v) => write!(f, "\"{}\"", v.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            Self::List(values) => {
                f.write_str("[")?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", v)?;
                }
                f.write_str("]")
            }
            Self::Opaque(_) => f.write_str("{}"),
        }
    }
}

/// Double-quoted, with JSON-style escapes for quotes, backslashes and
/// control characters.
fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c.is_control() => write!(f, "\\u{:04x}", c as u32)?,
            c => f.write_char(c)?,
        }
    }
    f.write_str("\"")
}

// Floats compare by bit pattern so that equality agrees with hashing.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Uint(a), Self::Uint(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Bytes(a), Self::Bytes(b)) => a == b,
            (Self::Time(a), Self::Time(b)) => a == b && a.offset() == b.offset(),
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Opaque(a), Self::Opaque(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Nil => {}
            Self::Bool(v) => v.hash(state),
            Self::Int(v) => v.hash(state),
            Self::Uint(v) => v.hash(state),
            Self::Float(v) => v.to_bits().hash(state),
            Self::String(v) => v.hash(state),
            Self::Bytes(v) => v.hash(state),
            Self::Time(v) => v.hash(state),
            Self::List(v) => v.hash(state),
            Self::Opaque(v) => v.hash(state),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

macro_rules! impl_from_int {
    ($variant:ident => $wide:ty: $($t:ty),+) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Self::$variant(v as $wide)
                }
            }
        )+
    };
}

impl_from_int!(Int => i64: i8, i16, i32, i64, isize);
impl_from_int!(Uint => u64: u8, u16, u32, u64, usize);

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<SmolStr> for Value {
    fn from(v: SmolStr) -> Self {
        Self::String(v.to_string())
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Self::Bytes(v.to_vec())
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(v: DateTime<FixedOffset>) -> Self {
        Self::Time(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Self::Time(v.fixed_offset())
    }
}

impl From<Opaque> for Value {
    fn from(v: Opaque) -> Self {
        Self::Opaque(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Self::Nil,
        }
    }
}

/// A value type that knows how to hand itself to a database driver.
///
/// Predicates over valuers render as `{}`; the driver value is only
/// produced when a compiler binds the predicate as a query parameter.
pub trait Valuer: fmt::Debug + PartialEq + Send + Sync + 'static {
    /// Produce the value bound in place of this payload.
    fn value(&self) -> QlResult<Value>;
}

trait Payload: fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn eq_payload(&self, other: &dyn Payload) -> bool;
    fn driver_value(&self) -> Option<QlResult<Value>>;
}

struct Plain<T>(T);

struct Driver<T>(T);

impl<T: fmt::Debug> fmt::Debug for Plain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: fmt::Debug> fmt::Debug for Driver<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T> Payload for Plain<T>
where
    T: fmt::Debug + PartialEq + Send + Sync + 'static,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_payload(&self, other: &dyn Payload) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .is_some_and(|other| self.0 == other.0)
    }

    fn driver_value(&self) -> Option<QlResult<Value>> {
        None
    }
}

impl<T: Valuer> Payload for Driver<T> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_payload(&self, other: &dyn Payload) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .is_some_and(|other| self.0 == other.0)
    }

    fn driver_value(&self) -> Option<QlResult<Value>> {
        Some(self.0.value())
    }
}

/// A comparable payload that predicates carry without printing.
///
/// Two opaque values are equal when they wrap the same payload type and
/// the payloads compare equal. Hashing only considers the payload type,
/// which keeps it consistent with equality.
#[derive(Clone)]
pub struct Opaque(Arc<dyn Payload>);

impl Opaque {
    /// Wrap an arbitrary comparable payload.
    pub fn new<T>(payload: T) -> Self
    where
        T: fmt::Debug + PartialEq + Send + Sync + 'static,
    {
        Self(Arc::new(Plain(payload)))
    }

    /// Wrap a driver valuer.
    pub fn from_valuer<T: Valuer>(valuer: T) -> Self {
        Self(Arc::new(Driver(valuer)))
    }

    /// Borrow the payload if it has type `T`.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        let any = self.0.as_any();
        any.downcast_ref::<Plain<T>>()
            .map(|p| &p.0)
            .or_else(|| any.downcast_ref::<Driver<T>>().map(|d| &d.0))
    }

    /// Whether the payload is a driver valuer.
    pub fn is_valuer(&self) -> bool {
        self.0.driver_value().is_some()
    }

    /// The driver value, for payloads built with [`Opaque::from_valuer`].
    pub fn driver_value(&self) -> Option<QlResult<Value>> {
        self.0.driver_value()
    }

    fn payload_type(&self) -> TypeId {
        Any::type_id(self.0.as_any())
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Opaque").field(&self.0).finish()
    }
}

impl PartialEq for Opaque {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0.eq_payload(other.0.as_ref())
    }
}

impl Eq for Opaque {}

impl Hash for Opaque {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.payload_type().hash(state);
    }
}

impl Serialize for Opaque {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_unit_struct("Opaque")
    }
}

/// Bytes as base64 serialization.
mod base64_bytes {
    use base64::{Engine as _, engine::general_purpose::STANDARD};
    use serde::Serializer;

    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }
}
