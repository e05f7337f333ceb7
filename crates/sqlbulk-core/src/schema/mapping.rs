/// Pairs a model property with a differently named destination column.
///
/// Accepted in bulk by `add_column_mappings` to populate the column set and
/// the custom mapping together.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnMapping {
    pub property_name: String,
    pub column_name: String,
}

impl ColumnMapping {
    pub fn new(property_name: impl Into<String>, column_name: impl Into<String>) -> ColumnMapping {
        ColumnMapping {
            property_name: property_name.into(),
            column_name: column_name.into(),
        }
    }
}

impl<P: Into<String>, C: Into<String>> From<(P, C)> for ColumnMapping {
    fn from((property_name, column_name): (P, C)) -> ColumnMapping {
        ColumnMapping::new(property_name, column_name)
    }
}
