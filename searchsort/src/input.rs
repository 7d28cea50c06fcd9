use crate::error::EngineError;

/// Parse a comma-separated list of signed 32-bit integers. Tokens are
/// trimmed, so `"5, 3 , 8"` is accepted.
pub fn parse_numbers(text: &str) -> Result<Vec<i32>, EngineError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(EngineError::EmptyInput);
    }
    text.split(',')
        .map(|token| {
            let token = token.trim();
            token
                .parse::<i32>()
                .map_err(|_| EngineError::MalformedNumber(token.to_string()))
        })
        .collect()
}

/// Parse the search target field. A missing, blank, or non-integer value is
/// one error kind: the caller re-prompts either way.
pub fn parse_target(text: Option<&str>) -> Result<i32, EngineError> {
    text.map(str::trim)
        .filter(|t| !t.is_empty())
        .and_then(|t| t.parse().ok())
        .ok_or(EngineError::MissingOrInvalidTarget)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trimmed_tokens() {
        assert_eq!(parse_numbers(" 5, 3 ,8,1 "), Ok(vec![5, 3, 8, 1]));
    }

    #[test]
    fn parses_negative_numbers() {
        assert_eq!(parse_numbers("-5,10,3"), Ok(vec![-5, 10, 3]));
    }

    #[test]
    fn empty_text_is_empty_input() {
        assert_eq!(parse_numbers("   "), Err(EngineError::EmptyInput));
    }

    #[test]
    fn bad_token_is_reported() {
        assert_eq!(
            parse_numbers("1,two,3"),
            Err(EngineError::MalformedNumber("two".to_string()))
        );
    }

    #[test]
    fn target_requires_a_value() {
        assert_eq!(parse_target(Some(" 8 ")), Ok(8));
        assert_eq!(
            parse_target(None),
            Err(EngineError::MissingOrInvalidTarget)
        );
        assert_eq!(
            parse_target(Some("")),
            Err(EngineError::MissingOrInvalidTarget)
        );
        assert_eq!(
            parse_target(Some("eight")),
            Err(EngineError::MissingOrInvalidTarget)
        );
    }
}
