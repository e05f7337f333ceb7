use super::Primitive;
use sqlbulk_core::stmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};

macro_rules! impl_chrono_primitive {
    ($chrono:ty, $name:ident) => {
        impl Primitive for $chrono {
            const TYPE: stmt::Type = stmt::Type::$name;

            fn to_value(&self) -> stmt::Value {
                stmt::Value::$name(*self)
            }
        }
    };
}

impl_chrono_primitive!(DateTime<Utc>, Timestamp);
impl_chrono_primitive!(DateTime<FixedOffset>, TimestampTz);
impl_chrono_primitive!(NaiveDateTime, DateTime);
impl_chrono_primitive!(NaiveDate, Date);
impl_chrono_primitive!(NaiveTime, Time);
