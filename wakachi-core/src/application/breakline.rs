//! Breakline insertion
//!
//! After dependency resolution a CJK chunk may end with the space that
//! separated it from the next word. Such a space is replaced with an explicit
//! break chunk; trailing spaces after non-CJK words are left alone.

use log::debug;

use crate::domain::{Chunk, ChunkList};

pub fn insert_breaklines(chunks: ChunkList) -> ChunkList {
    let mut target = ChunkList::with_capacity(chunks.len());
    let mut inserted = 0;

    for chunk in chunks {
        let stripped = chunk
            .word()
            .strip_suffix(' ')
            .filter(|_| chunk.has_cjk())
            .map(str::to_owned);

        match stripped {
            Some(word) => {
                target.push(chunk.with_word(word));
                target.push(Chunk::breakline());
                inserted += 1;
            }
            None => target.push(chunk),
        }
    }

    debug!("inserted {inserted} breaklines");
    target
}
