use sqlbulk_core::stmt;

/// A field type whose values can be copied into a column.
///
/// Implemented for scalars (including `i128`, `u128`, `isize`, `usize` and
/// `rust_decimal::Decimal`), `String`, `Vec<u8>`, `Vec<char>`, `Uuid`, the
/// chrono date and time types and `Option` of any of these. Annotate a field
/// with `#[bulk(primitive)]` to copy a custom type implementing this trait.
pub trait Primitive {
    const TYPE: stmt::Type;
    const NULLABLE: bool = false;

    fn to_value(&self) -> stmt::Value;
}

macro_rules! impl_primitive_copy {
    ( $( $t:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl Primitive for $t {
                const TYPE: stmt::Type = stmt::Type::$variant;

                fn to_value(&self) -> stmt::Value {
                    stmt::Value::$variant(*self)
                }
            }
        )*
    };
}

impl_primitive_copy!(
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
    uuid::Uuid => Uuid,
);

// Pointer-sized integers are copied as their 64-bit counterparts.
impl Primitive for isize {
    const TYPE: stmt::Type = stmt::Type::I64;

    fn to_value(&self) -> stmt::Value {
        stmt::Value::I64(*self as i64)
    }
}

impl Primitive for usize {
    const TYPE: stmt::Type = stmt::Type::U64;

    fn to_value(&self) -> stmt::Value {
        stmt::Value::U64(*self as u64)
    }
}

impl Primitive for String {
    const TYPE: stmt::Type = stmt::Type::String;

    fn to_value(&self) -> stmt::Value {
        stmt::Value::String(self.clone())
    }
}

impl Primitive for Vec<u8> {
    const TYPE: stmt::Type = stmt::Type::Bytes;

    fn to_value(&self) -> stmt::Value {
        stmt::Value::Bytes(self.clone())
    }
}

impl Primitive for Vec<char> {
    const TYPE: stmt::Type = stmt::Type::Chars;

    fn to_value(&self) -> stmt::Value {
        stmt::Value::Chars(self.clone())
    }
}

impl<T: Primitive> Primitive for Option<T> {
    const TYPE: stmt::Type = T::TYPE;
    const NULLABLE: bool = true;

    fn to_value(&self) -> stmt::Value {
        match self {
            Some(value) => value.to_value(),
            None => stmt::Value::Null,
        }
    }
}
