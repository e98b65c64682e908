//! Boundary checks on collaborator output
//!
//! Tokens and entity spans come from outside the engine. They are checked
//! against the normalized text before any chunk is built.

use log::warn;

use crate::api::{Error, Result};
use crate::domain::{EntitySpan, Token};

/// Reject token sequences the engine cannot place in `text`
pub(crate) fn validate_tokens(text: &str, tokens: &[Token]) -> Result<()> {
    let text_len = text.chars().count();
    let mut previous_offset = 0;

    for (index, token) in tokens.iter().enumerate() {
        if token.word.is_empty() {
            return Err(Error::InvalidInput(format!(
                "token {index} has an empty word"
            )));
        }

        let end = token.begin_offset.checked_add(token.char_len());
        match end {
            Some(end) if end <= text_len => {}
            Some(end) => {
                return Err(Error::InvalidInput(format!(
                    "token {index} ({:?}) ends at {end}, past the text length {text_len}",
                    token.word
                )));
            }
            None => {
                return Err(Error::InvalidInput(format!(
                    "token {index} ({:?}) has offset {} past the text length {text_len}",
                    token.word, token.begin_offset
                )));
            }
        }

        if token.begin_offset < previous_offset {
            return Err(Error::InvalidInput(format!(
                "token {index} starts at {} before the previous token at {previous_offset}",
                token.begin_offset
            )));
        }

        if token.head_token_index >= tokens.len() {
            return Err(Error::InvalidInput(format!(
                "token {index} has head index {} but only {} tokens exist",
                token.head_token_index,
                tokens.len()
            )));
        }

        previous_offset = token.begin_offset;
    }

    Ok(())
}

/// Drop entity spans without content or starting outside `text`
pub(crate) fn sanitize_entities(text: &str, entities: Vec<EntitySpan>) -> Vec<EntitySpan> {
    let text_len = text.chars().count();
    entities
        .into_iter()
        .filter(|entity| {
            if entity.content.is_empty() {
                warn!("dropping empty entity span at offset {}", entity.begin_offset);
                return false;
            }
            if entity.begin_offset >= text_len {
                warn!(
                    "dropping entity span {:?} at offset {}, past the text length {text_len}",
                    entity.content, entity.begin_offset
                );
                return false;
            }
            true
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_tokens() {
        let tokens = vec![
            Token::new("今日", 0, "NOUN", "NN", 1),
            Token::new("は", 2, "PRT", "PRT", 0),
        ];
        assert!(validate_tokens("今日は", &tokens).is_ok());
        assert!(validate_tokens("", &[]).is_ok());
    }

    #[test]
    fn test_empty_word_rejected() {
        let tokens = vec![Token::new("", 0, "X", "ROOT", 0)];
        assert!(matches!(
            validate_tokens("abc", &tokens),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_token_past_text_rejected() {
        let tokens = vec![Token::new("abcd", 0, "X", "ROOT", 0)];
        let err = validate_tokens("abc", &tokens).unwrap_err();
        assert!(err.to_string().contains("past the text length 3"));
    }

    #[test]
    fn test_offsets_counted_in_characters() {
        let tokens = vec![Token::new("ご飯", 1, "NOUN", "ROOT", 0)];
        assert!(validate_tokens("「ご飯」", &tokens).is_ok());
    }

    #[test]
    fn test_decreasing_offsets_rejected() {
        let tokens = vec![
            Token::new("b", 1, "X", "ROOT", 0),
            Token::new("a", 0, "X", "DEP", 0),
        ];
        assert!(validate_tokens("ab", &tokens).is_err());
    }

    #[test]
    fn test_head_index_out_of_range_rejected() {
        let tokens = vec![Token::new("a", 0, "X", "ROOT", 3)];
        let err = validate_tokens("a", &tokens).unwrap_err();
        assert!(err.to_string().contains("head index 3"));
    }

    #[test]
    fn test_offset_overflow_rejected() {
        let tokens = vec![Token::new("abc", usize::MAX, "X", "ROOT", 0)];
        let err = validate_tokens("abc", &tokens).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(err.to_string().contains("past the text length 3"));
    }

    #[test]
    fn test_sanitize_entities() {
        let entities = vec![
            EntitySpan::new("", 0),
            EntitySpan::new("foo", 0),
            EntitySpan::new("bar", 3),
            EntitySpan::new("far", 100),
            EntitySpan::new("max", usize::MAX),
        ];
        assert_eq!(
            sanitize_entities("foobar", entities),
            vec![EntitySpan::new("foo", 0), EntitySpan::new("bar", 3)]
        );
    }
}
