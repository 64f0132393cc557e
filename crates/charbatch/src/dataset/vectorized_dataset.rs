//! # Vectorized Dataset and Batch Iteration

use rand::Rng;
use rand::seq::SliceRandom;

use crate::errors::{CBResult, CharbatchError};
use crate::types::SymbolIndex;

/// Fixed-width index rows with one-hot labels and epoch cursor state.
///
/// Batch retrieval walks a permutation of record indices. The cursor and
/// permutation are the only mutable state; this type assumes a single
/// owner driving a single training loop. Sharing one instance between
/// consumers requires external synchronization — concurrent `next_batch`
/// calls are not supported.
#[derive(Debug, Clone)]
pub struct VectorizedDataset {
    /// Index rows, all `row_width` wide.
    text: Vec<Vec<SymbolIndex>>,

    /// One-hot label rows; empty for unlabeled data.
    labels: Vec<Vec<u8>>,

    /// The fixed label ordering behind the one-hot positions.
    label_list: Vec<String>,

    /// The fixed row width.
    row_width: usize,

    /// The current retrieval order.
    record_indices: Vec<usize>,

    /// Cursor into `record_indices`; always within `0..=num_records`.
    records_used: usize,

    /// Whether the most recent sized batch request wrapped past the end.
    epoch_completed: bool,
}

impl VectorizedDataset {
    /// Create a vectorized dataset with an identity retrieval order.
    pub fn new(
        text: Vec<Vec<SymbolIndex>>,
        labels: Vec<Vec<u8>>,
        label_list: Vec<String>,
        row_width: usize,
    ) -> Self {
        let record_indices = (0..text.len()).collect();

        Self {
            text,
            labels,
            label_list,
            row_width,
            record_indices,
            records_used: 0,
            epoch_completed: false,
        }
    }

    /// Index rows in storage order.
    pub fn text(&self) -> &[Vec<SymbolIndex>] {
        &self.text
    }

    /// One-hot label rows in storage order.
    pub fn labels(&self) -> &[Vec<u8>] {
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

    /// The fixed row width.
    pub fn max_text_length(&self) -> usize {
        self.row_width
    }

    /// Records consumed from the current permutation.
    pub fn records_used(&self) -> usize {
        self.records_used
    }

    /// True only immediately after a sized batch request wrapped past the
    /// end of the permutation.
    pub fn epoch_completed(&self) -> bool {
        self.epoch_completed
    }

    /// Start a fresh epoch.
    ///
    /// ## Arguments
    /// * `shuffle` - Permute the retrieval order pseudo-randomly; otherwise
    ///   restore identity order. Either way the cursor returns to 0 and the
    ///   epoch flag clears.
    pub fn reset_epoch(
        &mut self,
        shuffle: bool,
    ) {
        if shuffle {
            self.record_indices.shuffle(&mut rand::rng());
        } else {
            self.record_indices = (0..self.num_records()).collect();
        }
        self.records_used = 0;
        self.epoch_completed = false;
    }

    /// Start a fresh shuffled epoch using the given generator.
    ///
    /// Same as [`Self::reset_epoch`] with `shuffle`, but deterministic
    /// under a seeded [`Rng`].
    pub fn reset_epoch_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) {
        self.record_indices.shuffle(rng);
        self.records_used = 0;
        self.epoch_completed = false;
    }

    /// Retrieve the next batch of `(text, labels)` rows.
    ///
    /// `batch_size == 0` is the full-batch escape hatch: the entire text
    /// and label arrays come back in storage order and the cursor is left
    /// untouched.
    ///
    /// Otherwise the permutation is walked from the cursor, collecting
    /// exactly `batch_size` records. Reaching the end mid-batch resets the
    /// cursor, marks the epoch completed, and keeps collecting from the
    /// top — every successful call returns exactly `batch_size` rows. The
    /// wrap happens at most once per call; a request that a full fresh
    /// pass still cannot satisfy fails with
    /// [`CharbatchError::BatchExhausted`].
    ///
    /// ## Arguments
    /// * `batch_size` - The number of records to retrieve, or 0 for all.
    ///
    /// ## Returns
    /// Parallel text/label row vectors. Label rows are absent for
    /// unlabeled data.
    pub fn next_batch(
        &mut self,
        batch_size: usize,
    ) -> CBResult<(Vec<Vec<SymbolIndex>>, Vec<Vec<u8>>)> {
        if batch_size == 0 {
            return Ok((self.text.clone(), self.labels.clone()));
        }

        let mut text = Vec::with_capacity(batch_size);
        let mut labels = Vec::with_capacity(batch_size);

        self.epoch_completed = false;
        let mut wrapped = false;
        while text.len() < batch_size {
            let mut retrieved = 0;
            for &index in &self.record_indices[self.records_used..] {
                text.push(self.text[index].clone());
                if let Some(row) = self.labels.get(index) {
                    labels.push(row.clone());
                }
                retrieved += 1;
                if text.len() == batch_size {
                    break;
                }
            }
            self.records_used += retrieved;

            if text.len() < batch_size {
                if wrapped {
                    return Err(CharbatchError::BatchExhausted {
                        requested: batch_size,
                        num_records: self.num_records(),
                    });
                }
                self.records_used = 0;
                self.epoch_completed = true;
                wrapped = true;
            }
        }

        Ok((text, labels))
    }
}
