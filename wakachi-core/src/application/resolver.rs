//! Dependency resolution
//!
//! Chunks that lean toward a neighbour are folded into it. Resolution runs
//! two passes over the list: a forward pass that attaches forward-leaning
//! chunks (opening brackets, prefixes) to the word after them, then a
//! backward pass that attaches backward-leaning chunks (particles,
//! auxiliaries, closing punctuation) and standalone spaces to the word
//! before them.

use log::{debug, trace};

use crate::domain::{Chunk, ChunkList, ChunkTag, Dependency};

/// Scan direction of a concatenation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// The dependency a chunk must carry to be absorbed in this pass
    pub fn dependency(self) -> Dependency {
        match self {
            Direction::Forward => Dependency::Forward,
            Direction::Backward => Dependency::Backward,
        }
    }

    fn absorbs(self, chunk: &Chunk) -> bool {
        chunk.dependency() == self.dependency()
            || (self == Direction::Backward && chunk.is_space())
    }
}

/// Run one concatenation pass.
///
/// Chunks are visited in `direction` order and collected until one that does
/// not lean in that direction shows up. That chunk is the anchor: the
/// collected words are joined to it in left-to-right order and the result
/// keeps the anchor's metadata. Chunks still collected when the scan ends
/// have nothing to attach to and are emitted unchanged. A space that anchors
/// the first chunk of the text loses its `Space` tag, since a leading space
/// chunk is never rendered.
pub fn concatenate(chunks: ChunkList, direction: Direction) -> ChunkList {
    let mut source: Vec<Chunk> = chunks.into_iter().collect();
    if direction == Direction::Backward {
        source.reverse();
    }

    let mut bucket: Vec<Chunk> = Vec::new();
    let mut target: Vec<Chunk> = Vec::with_capacity(source.len());

    for chunk in source {
        if direction.absorbs(&chunk) {
            bucket.push(chunk);
            continue;
        }

        if bucket.is_empty() {
            target.push(chunk);
            continue;
        }

        let word = match direction {
            Direction::Forward => bucket
                .iter()
                .map(Chunk::word)
                .chain(std::iter::once(chunk.word()))
                .collect::<String>(),
            Direction::Backward => std::iter::once(chunk.word())
                .chain(bucket.iter().rev().map(Chunk::word))
                .collect::<String>(),
        };
        trace!("{direction:?} merge of {} chunks into {word:?}", bucket.len() + 1);
        bucket.clear();
        let leading_space = direction == Direction::Forward && chunk.is_space() && target.is_empty();
        let merged = chunk.with_word(word);
        if leading_space {
            target.push(merged.with_tag(ChunkTag::None));
        } else {
            target.push(merged);
        }
    }

    target.extend(bucket);
    if direction == Direction::Backward {
        target.reverse();
    }

    target.into()
}

/// Collapse every dependent chunk into the word it depends on
pub fn resolve_dependency(chunks: ChunkList) -> ChunkList {
    let before = chunks.len();
    let chunks = concatenate(chunks, Direction::Forward);
    let chunks = concatenate(chunks, Direction::Backward);
    debug!("resolved dependencies: {before} -> {} chunks", chunks.len());
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ChunkOptions;

    fn chunk(word: &str, dependency: Dependency) -> Chunk {
        Chunk::with_options(word, ChunkOptions::default().dependency(dependency))
    }

    fn sample() -> ChunkList {
        vec![
            chunk("ab", Dependency::Unresolved),
            chunk("cde", Dependency::Forward),
            chunk("fgh", Dependency::Backward),
        ]
        .into()
    }

    #[test]
    fn test_forward_pass_merges_into_following() {
        let result = concatenate(sample(), Direction::Forward);
        assert_eq!(result.words(), vec!["ab", "cdefgh"]);
    }

    #[test]
    fn test_forward_pass_keeps_anchor_dependency() {
        let result = concatenate(sample(), Direction::Forward);
        let dependencies: Vec<_> = result.iter().map(Chunk::dependency).collect();
        assert_eq!(
            dependencies,
            vec![Dependency::Unresolved, Dependency::Backward]
        );
    }

    #[test]
    fn test_backward_after_forward() {
        let result = concatenate(sample(), Direction::Forward);
        let result = concatenate(result, Direction::Backward);
        assert_eq!(result.words(), vec!["abcdefgh"]);
    }

    #[test]
    fn test_backward_pass_absorbs_spaces() {
        let chunks: ChunkList = vec![Chunk::new("Hello"), Chunk::space(), Chunk::new("world")].into();
        let result = concatenate(chunks, Direction::Backward);
        assert_eq!(result.words(), vec!["Hello ", "world"]);
    }

    #[test]
    fn test_forward_chunk_attaches_to_space() {
        let chunks: ChunkList = vec![
            chunk("foo", Dependency::Unresolved),
            chunk("「", Dependency::Forward),
            Chunk::space(),
            chunk("bar", Dependency::Unresolved),
        ]
        .into();
        let result = concatenate(chunks.clone(), Direction::Forward);
        assert_eq!(result.words(), vec!["foo", "「 ", "bar"]);
        assert!(result.get(1).is_some_and(Chunk::is_space));

        let result = resolve_dependency(chunks);
        assert_eq!(result.words(), vec!["foo「 ", "bar"]);
    }

    #[test]
    fn test_leading_forward_chunk_keeps_text() {
        let chunks: ChunkList = vec![
            chunk("「", Dependency::Forward),
            Chunk::space(),
            chunk("foo", Dependency::Unresolved),
        ]
        .into();
        let result = concatenate(chunks, Direction::Forward);
        assert_eq!(result.words(), vec!["「 ", "foo"]);
        assert_eq!(result.get(0).map(Chunk::tag), Some(ChunkTag::None));

        let result = concatenate(result, Direction::Backward);
        assert_eq!(result.words(), vec!["「 ", "foo"]);
    }

    #[test]
    fn test_leftover_chunks_are_kept() {
        // Nothing after a forward-leaning chunk: it stays as is
        let chunks: ChunkList = vec![
            chunk("foo", Dependency::Unresolved),
            chunk("「", Dependency::Forward),
            chunk("(", Dependency::Forward),
        ]
        .into();
        let result = concatenate(chunks, Direction::Forward);
        assert_eq!(result.words(), vec!["foo", "「", "("]);

        // Nothing before a backward-leaning chunk
        let chunks: ChunkList = vec![
            chunk("。", Dependency::Backward),
            chunk("bar", Dependency::Unresolved),
        ]
        .into();
        let result = concatenate(chunks, Direction::Backward);
        assert_eq!(result.words(), vec!["。", "bar"]);
    }

    #[test]
    fn test_resolve_dependency_keeps_independent_words() {
        let chunks: ChunkList = vec![
            chunk("今日", Dependency::Unresolved),
            chunk("は", Dependency::Backward),
            chunk("「", Dependency::Forward),
            chunk("晴れ", Dependency::Unresolved),
            chunk("」", Dependency::Backward),
            chunk("。", Dependency::Backward),
        ]
        .into();
        let result = resolve_dependency(chunks);
        assert_eq!(result.words(), vec!["今日は", "「晴れ」。"]);
    }

    #[test]
    fn test_resolve_empty() {
        assert!(resolve_dependency(ChunkList::new()).is_empty());
    }
}
