//! Stage orchestration for the token path

use crate::domain::error::Result;
use crate::domain::{ChunkList, EntitySpan, Token};

use super::{chunks_from_tokens, group_by_entities, insert_breaklines, resolve_dependency};

/// Turn annotated tokens into the final chunk sequence.
///
/// Entity grouping runs only when `entities` is given.
pub fn process_tokens(tokens: &[Token], entities: Option<&[EntitySpan]>) -> Result<ChunkList> {
    let mut chunks = chunks_from_tokens(tokens);

    if let Some(entities) = entities {
        chunks = group_by_entities(chunks, entities)?;
    }

    let chunks = resolve_dependency(chunks);
    Ok(insert_breaklines(chunks))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_roppongi_sentence() {
        let tokens = vec![
            Token::new("六本木", 0, "NOUN", "NN", 1),
            Token::new("ヒルズ", 3, "NOUN", "ADVPHMOD", 8),
            Token::new("で", 6, "PRT", "PRT", 1),
            Token::new("、", 7, "PUNCT", "P", 8),
            Token::new("「", 8, "PUNCT", "P", 5),
            Token::new("ご飯", 9, "NOUN", "DOBJ", 8),
            Token::new("」", 11, "PUNCT", "P", 5),
            Token::new("を", 12, "PRT", "PRT", 5),
            Token::new("食べ", 13, "VERB", "ROOT", 8),
            Token::new("ます", 15, "VERB", "AUX", 8),
            Token::new("。", 17, "PUNCT", "P", 8),
        ];

        let chunks = process_tokens(&tokens, None).unwrap();
        assert_eq!(
            chunks.words(),
            vec!["六本木", "ヒルズで、", "「ご飯」を", "食べます。"]
        );

        let entities = [EntitySpan::new("六本木ヒルズ", 0)];
        let chunks = process_tokens(&tokens, Some(&entities)).unwrap();
        assert_eq!(
            chunks.words(),
            vec!["六本木ヒルズで、", "「ご飯」を", "食べます。"]
        );
    }

    #[test]
    fn test_process_mixed_script_with_spaces() {
        let tokens = vec![
            Token::new("今日", 0, "NOUN", "NN", 2),
            Token::new("は", 2, "PRT", "PRT", 0),
            Token::new("Google", 4, "NOUN", "NSUBJ", 4),
            Token::new("の", 10, "PRT", "PRT", 2),
            Token::new("日", 11, "NOUN", "ROOT", 4),
        ];

        let chunks = process_tokens(&tokens, None).unwrap();
        assert_eq!(chunks.words(), vec!["今日は", "\n", "Googleの", "日"]);
    }
}
