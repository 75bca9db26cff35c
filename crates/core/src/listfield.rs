//! Lenient coercion of list-valued form fields.
//!
//! Admin uploads arrive as multipart text, so list fields (categories,
//! directors, casting) are JSON-encoded strings like `["drama","sci-fi"]`.
//! Anything that does not parse as a JSON string array coerces to an empty
//! list rather than failing the whole upload.

/// Parse a JSON-encoded string array, coercing malformed input to empty.
pub fn parse_string_list(raw: &str) -> Vec<String> {
    serde_json::from_str::<Vec<String>>(raw).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_json_array() {
        assert_eq!(
            parse_string_list(r#"["drama","sci-fi"]"#),
            vec!["drama".to_string(), "sci-fi".to_string()]
        );
    }

    #[test]
    fn test_empty_array() {
        assert!(parse_string_list("[]").is_empty());
    }

    #[test]
    fn test_malformed_input_coerces_to_empty() {
        assert!(parse_string_list("drama, sci-fi").is_empty());
        assert!(parse_string_list("{\"a\": 1}").is_empty());
        assert!(parse_string_list("").is_empty());
        assert!(parse_string_list("[1, 2]").is_empty());
    }
}
