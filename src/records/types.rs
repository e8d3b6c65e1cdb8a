//! # Column Field Types
//!
//! Per-column interpretation tags for record sets. A delimited sample-data
//! file may carry a second line of these tags, one per column; they decide
//! whether a value is single-quote-wrapped when a row is turned into a SQL
//! `VALUES (...)` clause.
//!
//! | Tag | Variant | Quoted in SQL |
//! |-----|---------|---------------|
//! | `string` | `String` | yes |
//! | `integer` | `Integer` | no |
//! | `double` | `Double` | no |
//! | `boolean` | `Boolean` | no |
//!
//! Every column defaults to `String` until tagged otherwise.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldType {
    #[default]
    String,
    Integer,
    Double,
    Boolean,
}

impl FieldType {
    /// Parses one tag from a type row. Unrecognized tags are `None`; callers
    /// fall back to [`FieldType::String`].
    pub fn from_tag(tag: &str) -> Option<FieldType> {
        match tag {
            "string" => Some(FieldType::String),
            "integer" => Some(FieldType::Integer),
            "double" => Some(FieldType::Double),
            "boolean" => Some(FieldType::Boolean),
            _ => None,
        }
    }

    /// True when values of this type are single-quote-wrapped in SQL.
    pub fn is_quoted(self) -> bool {
        matches!(self, FieldType::String)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_the_four_tags() {
        assert_eq!(FieldType::from_tag("string"), Some(FieldType::String));
        assert_eq!(FieldType::from_tag("integer"), Some(FieldType::Integer));
        assert_eq!(FieldType::from_tag("double"), Some(FieldType::Double));
        assert_eq!(FieldType::from_tag("boolean"), Some(FieldType::Boolean));
    }

    #[test]
    fn unrecognized_tags_are_none() {
        assert_eq!(FieldType::from_tag("text"), None);
        assert_eq!(FieldType::from_tag("STRING"), None);
        assert_eq!(FieldType::from_tag(""), None);
    }

    #[test]
    fn only_string_values_are_quoted() {
        assert!(FieldType::String.is_quoted());
        assert!(!FieldType::Integer.is_quoted());
        assert!(!FieldType::Double.is_quoted());
        assert!(!FieldType::Boolean.is_quoted());
    }

    #[test]
    fn default_is_string() {
        assert_eq!(FieldType::default(), FieldType::String);
    }
}
