//! # Character Vocabulary Builder

use hashbrown::hash_map::Entry;

use crate::types::{CBHashMap, hash_map_with_capacity};
use crate::vocab::vocab_index::VocabIndex;
use crate::vocab::{END_SYMBOL, START_SYMBOL, UNKNOWN_SYMBOL};

/// Seed count for the start/end markers; ranks them ahead of any character
/// that does not reach the same corpus frequency.
const SENTINEL_COUNT: u32 = 10_000;

/// Options for [`build_text_vocab_with`].
#[derive(Debug, Clone)]
pub struct TextVocabOptions {
    /// Minimum corpus frequency for a character to be kept.
    pub min_count: u32,
}

impl Default for TextVocabOptions {
    fn default() -> Self {
        Self { min_count: 10 }
    }
}

impl TextVocabOptions {
    /// Set the minimum corpus frequency for a character to be kept.
    pub fn with_min_count(
        self,
        min_count: u32,
    ) -> Self {
        Self { min_count }
    }
}

/// Build a character vocabulary from cleaned text with default options.
///
/// See [`build_text_vocab_with`].
pub fn build_text_vocab<I>(lines: I) -> VocabIndex
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    build_text_vocab_with(lines, TextVocabOptions::default())
}

/// Build a character vocabulary from cleaned text.
///
/// Characters are counted across every whitespace-delimited word of every
/// line, in discovery order. The reserved symbols rank first: `<UNK>` seeds
/// the table at count 0, `<S>` and `</S>` at the sentinel count. A character
/// at or above `min_count` keeps its true count; every rarer character is
/// discarded and adds a flat +1 to `<UNK>`'s count, regardless of its own
/// frequency. The kept table is stable-sorted by count descending (ties
/// keep discovery order) and rank-coded in that order.
///
/// ## Arguments
/// * `lines` - The cleaned corpus lines.
/// * `options` - Frequency-pruning options.
///
/// ## Returns
/// The character [`VocabIndex`].
pub fn build_text_vocab_with<I>(
    lines: I,
    options: TextVocabOptions,
) -> VocabIndex
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    log::info!("Building text vocabulary");

    let mut counts: CBHashMap<char, u32> = hash_map_with_capacity(1024);
    let mut discovered: Vec<char> = Vec::new();
    for line in lines {
        for word in line.as_ref().split_whitespace() {
            for ch in word.chars() {
                match counts.entry(ch) {
                    Entry::Occupied(mut entry) => *entry.get_mut() += 1,
                    Entry::Vacant(entry) => {
                        entry.insert(1);
                        discovered.push(ch);
                    }
                }
            }
        }
    }

    let mut table: Vec<(String, u32)> = vec![
        (UNKNOWN_SYMBOL.to_string(), 0),
        (START_SYMBOL.to_string(), SENTINEL_COUNT),
        (END_SYMBOL.to_string(), SENTINEL_COUNT),
    ];

    let mut pruned = 0u32;
    for ch in discovered {
        let count = counts[&ch];
        if count >= options.min_count {
            table.push((ch.to_string(), count));
        } else {
            pruned += 1;
        }
    }
    table[0].1 = pruned;

    // Stable: ties keep discovery order, with the reserved symbols seeded
    // ahead of every discovered character.
    table.sort_by(|a, b| b.1.cmp(&a.1));

    log::info!(
        "Vocabulary built: {} characters kept, {} pruned into {}",
        table.len() - 3,
        pruned,
        UNKNOWN_SYMBOL,
    );

    VocabIndex::from_symbols(table.into_iter().map(|(symbol, _)| symbol).collect())
}
