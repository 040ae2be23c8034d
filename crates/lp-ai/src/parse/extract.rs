use crate::error::ParseError;

/// Slice from the first `{` to the last `}` inclusive.
///
/// Models wrap JSON in prose or code fences often enough that the outermost
/// brace span is the most reliable way to recover the object.
///
/// # Errors
///
/// Returns [`ParseError::NoJsonObject`] when there is no opening brace with a
/// closing brace after it.
pub fn extract_json_object(text: &str) -> Result<&str, ParseError> {
    let start = text.find('{').ok_or(ParseError::NoJsonObject)?;
    let end = text.rfind('}').ok_or(ParseError::NoJsonObject)?;
    if end <= start {
        return Err(ParseError::NoJsonObject);
    }
    Ok(&text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(r#"{"a":1}"#, r#"{"a":1}"#)]
    #[case("Here you go:\n```json\n{\"a\":1}\n```\nGood luck!", r#"{"a":1}"#)]
    #[case(r#"pre {"a":{"b":2}} post"#, r#"{"a":{"b":2}}"#)]
    fn finds_outer_object(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(extract_json_object(text).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("no braces at all")]
    #[case("only { open")]
    #[case("} backwards {")]
    fn rejects_missing_object(#[case] text: &str) {
        assert!(matches!(
            extract_json_object(text),
            Err(ParseError::NoJsonObject)
        ));
    }
}
