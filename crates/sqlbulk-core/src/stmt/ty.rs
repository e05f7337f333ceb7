use super::Value;

/// The type of a copyable column value.
///
/// Only scalar, string, character array and byte array types have a `Type`.
/// Fields of any other type are described by
/// [`FieldTy::Object`](crate::schema::FieldTy::Object) and cannot be copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// Boolean value
    Bool,

    /// Signed 8-bit integer
    I8,

    /// Signed 16-bit integer
    I16,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// Signed 128-bit integer
    I128,

    /// Unsigned 8-bit integer
    U8,

    /// Unsigned 16-bit integer
    U16,

    /// Unsigned 32-bit integer
    U32,

    /// Unsigned 64-bit integer
    U64,

    /// Unsigned 128-bit integer
    U128,

    /// 32-bit float
    F32,

    /// 64-bit float
    F64,

    /// Fixed-precision decimal number
    Decimal,

    /// A single character
    Char,

    /// String type
    String,

    /// Byte array
    Bytes,

    /// Character array
    Chars,

    /// UUID
    Uuid,

    /// Calendar date without a time zone
    Date,

    /// Time of day without a time zone
    Time,

    /// Date and time without a time zone
    DateTime,

    /// Date and time in UTC
    Timestamp,

    /// Date and time with a fixed UTC offset
    TimestampTz,
}

impl Type {
    /// The variant name, as used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bool => "Bool",
            Self::I8 => "I8",
            Self::I16 => "I16",
            Self::I32 => "I32",
            Self::I64 => "I64",
            Self::I128 => "I128",
            Self::U8 => "U8",
            Self::U16 => "U16",
            Self::U32 => "U32",
            Self::U64 => "U64",
            Self::U128 => "U128",
            Self::F32 => "F32",
            Self::F64 => "F64",
            Self::Decimal => "Decimal",
            Self::Char => "Char",
            Self::String => "String",
            Self::Bytes => "Bytes",
            Self::Chars => "Chars",
            Self::Uuid => "Uuid",
            Self::Date => "Date",
            Self::Time => "Time",
            Self::DateTime => "DateTime",
            Self::Timestamp => "Timestamp",
            Self::TimestampTz => "TimestampTz",
        }
    }

    /// Returns `true` if `value` is an instance of this type. `Null` is an
    /// instance of every type; nullability is tracked on the field.
    pub fn accepts(&self, value: &Value) -> bool {
        match value.ty() {
            Some(ty) => ty == *self,
            None => true,
        }
    }
}
