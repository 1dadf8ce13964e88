use thiserror::Error;

/// Errors returned when building a selector.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SelectorError {
    #[error("font size selector needs at least one option")]
    NoOptions,
    #[error("font size {size} at position {index} is not a positive finite value")]
    InvalidSize { index: usize, size: f32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_option() {
        let err = SelectorError::InvalidSize {
            index: 2,
            size: -1.0,
        };
        assert_eq!(
            err.to_string(),
            "font size -1 at position 2 is not a positive finite value"
        );
    }
}
