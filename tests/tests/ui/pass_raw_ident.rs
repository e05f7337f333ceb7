use sqlbulk::Model;

#[derive(Debug, Model)]
pub struct Item {
    pub r#type: String,
    pub quantity: u32,
}

fn main() {
    let path = Item::fields().r#type();
    assert_eq!(path.field_name().unwrap(), "type");
    assert_eq!(<Item as Model>::NAME, "Item");
}
