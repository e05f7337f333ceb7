use crate::{Error, Result};

/// Schema used when none is supplied.
pub const DEFAULT_SCHEMA: &str = "dbo";

/// Identifies the destination table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableName {
    /// Explicitly supplied schema, if any
    pub schema: Option<String>,

    /// Unqualified table name
    pub name: String,
}

impl TableName {
    /// Parses `table`, `schema.table` or the bracketed `[schema].[table]`.
    pub fn parse(src: &str) -> Result<TableName> {
        let src = src.trim();

        if src.is_empty() {
            return Err(Error::invalid_argument(
                "table_name",
                "table name must not be empty",
            ));
        }

        let (schema, name) = match split_qualified(src)? {
            Some((schema, name)) => (Some(unquote(schema)), unquote(name)),
            None => (None, unquote(src)),
        };

        if name.is_empty() {
            return Err(Error::invalid_argument(
                "table_name",
                format!("`{src}` does not name a table"),
            ));
        }

        if schema.as_deref() == Some("") {
            return Err(Error::invalid_argument(
                "table_name",
                format!("`{src}` has an empty schema"),
            ));
        }

        Ok(TableName { schema, name })
    }

    /// The schema the operation targets, falling back to [`DEFAULT_SCHEMA`].
    pub fn effective_schema(&self) -> &str {
        self.schema.as_deref().unwrap_or(DEFAULT_SCHEMA)
    }

    /// `[schema].[name]` with the effective schema.
    pub fn qualified(&self) -> String {
        format!("[{}].[{}]", self.effective_schema(), self.name)
    }
}

/// Splits `schema.table` on the one `.` outside brackets.
///
/// Three part names and unbalanced brackets are rejected.
fn split_qualified(src: &str) -> Result<Option<(&str, &str)>> {
    let mut in_brackets = false;
    let mut split = None;

    for (index, ch) in src.char_indices() {
        match ch {
            '[' if !in_brackets => in_brackets = true,
            ']' if in_brackets => in_brackets = false,
            ']' => {
                return Err(Error::invalid_argument(
                    "table_name",
                    format!("`{src}` has an unmatched `]`"),
                ))
            }
            '.' if !in_brackets => {
                if split.is_some() {
                    return Err(Error::invalid_argument(
                        "table_name",
                        format!("`{src}` has more than one `.`; expected `table` or `schema.table`"),
                    ));
                }
                split = Some(index);
            }
            _ => {}
        }
    }

    if in_brackets {
        return Err(Error::invalid_argument(
            "table_name",
            format!("`{src}` has an unclosed `[`"),
        ));
    }

    Ok(split.map(|index| (&src[..index], &src[index + 1..])))
}

fn unquote(part: &str) -> String {
    let part = part.trim();
    part.strip_prefix('[')
        .and_then(|part| part.strip_suffix(']'))
        .unwrap_or(part)
        .to_string()
}
