use super::Type;

/// A single column value extracted from a model instance.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 8-bit integer
    I8(i8),

    /// Signed 16-bit integer
    I16(i16),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// Signed 128-bit integer
    I128(i128),

    /// Unsigned 8-bit integer
    U8(u8),

    /// Unsigned 16-bit integer
    U16(u16),

    /// Unsigned 32-bit integer
    U32(u32),

    /// Unsigned 64-bit integer
    U64(u64),

    /// Unsigned 128-bit integer
    U128(u128),

    /// 32-bit float
    F32(f32),

    /// 64-bit float
    F64(f64),

    /// Fixed-precision decimal number
    Decimal(rust_decimal::Decimal),

    /// A single character
    Char(char),

    /// String value
    String(String),

    /// Byte array
    Bytes(Vec<u8>),

    /// Character array
    Chars(Vec<char>),

    /// UUID
    Uuid(uuid::Uuid),

    /// Calendar date
    Date(chrono::NaiveDate),

    /// Time of day
    Time(chrono::NaiveTime),

    /// Date and time without a time zone
    DateTime(chrono::NaiveDateTime),

    /// Date and time in UTC
    Timestamp(chrono::DateTime<chrono::Utc>),

    /// Date and time with a fixed UTC offset
    TimestampTz(chrono::DateTime<chrono::FixedOffset>),

    /// Null value
    #[default]
    Null,
}

impl Value {
    /// The type of this value, or `None` for `Null`.
    pub fn ty(&self) -> Option<Type> {
        Some(match self {
            Self::Bool(_) => Type::Bool,
            Self::I8(_) => Type::I8,
            Self::I16(_) => Type::I16,
            Self::I32(_) => Type::I32,
            Self::I64(_) => Type::I64,
            Self::I128(_) => Type::I128,
            Self::U8(_) => Type::U8,
            Self::U16(_) => Type::U16,
            Self::U32(_) => Type::U32,
            Self::U64(_) => Type::U64,
            Self::U128(_) => Type::U128,
            Self::F32(_) => Type::F32,
            Self::F64(_) => Type::F64,
            Self::Decimal(_) => Type::Decimal,
            Self::Char(_) => Type::Char,
            Self::String(_) => Type::String,
            Self::Bytes(_) => Type::Bytes,
            Self::Chars(_) => Type::Chars,
            Self::Uuid(_) => Type::Uuid,
            Self::Date(_) => Type::Date,
            Self::Time(_) => Type::Time,
            Self::DateTime(_) => Type::DateTime,
            Self::Timestamp(_) => Type::Timestamp,
            Self::TimestampTz(_) => Type::TimestampTz,
            Self::Null => return None,
        })
    }
}

macro_rules! impl_from {
    ( $( $t:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from!(
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    f32 => F32,
    f64 => F64,
    rust_decimal::Decimal => Decimal,
    char => Char,
    String => String,
    Vec<u8> => Bytes,
    Vec<char> => Chars,
    uuid::Uuid => Uuid,
);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl<T> From<Option<T>> for Value
where
    Value: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Value::from(value),
            None => Value::Null,
        }
    }
}
