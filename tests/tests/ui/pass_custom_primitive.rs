use sqlbulk::{stmt::{Type, Value}, Model, Primitive};

#[derive(Debug, Clone, Copy)]
pub struct Cents(i64);

impl Primitive for Cents {
    const TYPE: Type = Type::I64;

    fn to_value(&self) -> Value {
        Value::I64(self.0)
    }
}

#[derive(Debug, Model)]
struct Invoice {
    #[bulk(primitive)]
    #[column("amount_cents")]
    amount: Cents,
}

fn main() {
    let invoice = Invoice { amount: Cents(1250) };
    let value = invoice.field_value("amount").unwrap();
    assert_eq!(value, Value::I64(1250));

    let schema = Invoice::schema();
    assert_eq!(schema.fields[0].default_column_name(), "amount_cents");
}
