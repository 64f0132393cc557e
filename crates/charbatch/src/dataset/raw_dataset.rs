//! # Raw Dataset and Vectorization

use crate::dataset::vectorized_dataset::VectorizedDataset;
use crate::errors::{CBResult, CharbatchError};
use crate::types::SymbolIndex;
use crate::vocab::{END_SYMBOL, START_SYMBOL, UNKNOWN_SYMBOL, VocabIndex};

/// Row layout policy for the fixed-width grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowFill {
    /// Legacy row layout: the final content index of each sequence is
    /// dropped and the end marker written in its place, so the end index
    /// appears once more than the sequence calls for.
    #[default]
    EndMarkerOverrun,

    /// Write the whole sequence and pad the tail with the end index.
    Exact,
}

/// Options for [`RawDataset::vectorize`].
#[derive(Debug, Clone)]
pub struct VectorizeOptions {
    /// The fixed row width. A record whose index sequence is longer than
    /// this aborts the whole vectorization.
    pub max_chars_limit: usize,

    /// Row layout policy.
    pub row_fill: RowFill,
}

impl Default for VectorizeOptions {
    fn default() -> Self {
        Self {
            max_chars_limit: 150,
            row_fill: RowFill::default(),
        }
    }
}

impl VectorizeOptions {
    /// Set the fixed row width.
    pub fn with_max_chars_limit(
        self,
        max_chars_limit: usize,
    ) -> Self {
        Self {
            max_chars_limit,
            ..self
        }
    }

    /// Set the row layout policy.
    pub fn with_row_fill(
        self,
        row_fill: RowFill,
    ) -> Self {
        Self { row_fill, ..self }
    }
}

/// Cleaned text records with raw labels, as loaded.
///
/// The record count is fixed at construction. Vectorization does not touch
/// this value; it produces a new [`VectorizedDataset`].
#[derive(Debug, Clone)]
pub struct RawDataset {
    text: Vec<String>,
    labels: Vec<String>,
    label_list: Vec<String>,
}

impl RawDataset {
    /// Create a dataset from parallel text/label rows.
    ///
    /// ## Arguments
    /// * `text` - Cleaned text, one record per entry.
    /// * `labels` - Raw labels, parallel to `text`; empty for unlabeled
    ///   (test) data.
    /// * `label_list` - The fixed, ordered label set for one-hot positions.
    pub fn new(
        text: Vec<String>,
        labels: Vec<String>,
        label_list: Vec<String>,
    ) -> Self {
        Self {
            text,
            labels,
            label_list,
        }
    }

    /// Cleaned text rows.
    pub fn text(&self) -> &[String] {
        &self.text
    }

    /// Raw label rows.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The fixed label ordering.
    pub fn label_list(&self) -> &[String] {
        &self.label_list
    }

    /// The number of records.
    pub fn num_records(&self) -> usize {
        self.text.len()
    }

    /// The number of label classes.
    pub fn num_classes(&self) -> usize {
        self.label_list.len()
    }

    /// Vectorize into a fixed-width grid.
    ///
    /// Each record becomes an index sequence: the `<S>` position, then the
    /// position of every character of every whitespace-delimited word
    /// (characters missing from the vocabulary resolve to `<UNK>`), then the
    /// `</S>` position. If the longest sequence exceeds
    /// `options.max_chars_limit` the whole operation fails with
    /// [`CharbatchError::SequenceOverflow`] — a fixed-width grid cannot
    /// absorb a single oversized row. Rows are laid out per
    /// `options.row_fill`, with every cell beyond the sequence holding the
    /// end index.
    ///
    /// Labels become one-hot vectors over the label list; a label missing
    /// from the list yields an all-zero vector, silently.
    ///
    /// ## Arguments
    /// * `vocab` - The character vocabulary.
    /// * `options` - Width and layout options.
    ///
    /// ## Returns
    /// A new [`VectorizedDataset`].
    pub fn vectorize(
        &self,
        vocab: &VocabIndex,
        options: &VectorizeOptions,
    ) -> CBResult<VectorizedDataset> {
        log::info!("Vectorizing text: {} lines", self.text.len());

        let unknown = vocab.position(UNKNOWN_SYMBOL)?;
        let start = vocab.position(START_SYMBOL)?;
        let end = vocab.position(END_SYMBOL)?;

        let mut sequences = Vec::with_capacity(self.text.len());
        let mut longest = 0;
        for line in &self.text {
            let mut indices: Vec<SymbolIndex> = vec![start as SymbolIndex];
            for word in line.split_whitespace() {
                for ch in word.chars() {
                    let mut buf = [0u8; 4];
                    let position = vocab
                        .position(ch.encode_utf8(&mut buf))
                        .unwrap_or(unknown);
                    indices.push(position as SymbolIndex);
                }
            }
            indices.push(end as SymbolIndex);

            longest = longest.max(indices.len());
            sequences.push(indices);
        }

        if longest > options.max_chars_limit {
            return Err(CharbatchError::SequenceOverflow {
                longest,
                limit: options.max_chars_limit,
            });
        }

        let end_index = end as SymbolIndex;
        let width = options.max_chars_limit;
        let mut rows = Vec::with_capacity(sequences.len());
        for sequence in &sequences {
            let mut row = vec![end_index; width];
            let copied = match options.row_fill {
                // The written region stops one short of the sequence: the
                // final content index never lands, and the end index that
                // pre-fills the row shows through from that cell onward.
                RowFill::EndMarkerOverrun => sequence.len() - 2,
                RowFill::Exact => sequence.len(),
            };
            row[..copied].copy_from_slice(&sequence[..copied]);
            rows.push(row);
        }

        let one_hot = self
            .labels
            .iter()
            .map(|label| {
                self.label_list
                    .iter()
                    .map(|reference| u8::from(reference == label))
                    .collect()
            })
            .collect();

        log::info!("{} lines vectorized", rows.len());

        Ok(VectorizedDataset::new(
            rows,
            one_hot,
            self.label_list.clone(),
            width,
        ))
    }
}
