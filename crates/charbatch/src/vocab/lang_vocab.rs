//! # Label Vocabulary Builder

use crate::vocab::vocab_index::VocabIndex;

/// Build a label vocabulary.
///
/// Labels are rank-coded directly in the order given; there is no frequency
/// filtering and no reserved symbols. The caller supplies an already
/// deduplicated label list (first-seen order when it comes from a loaded
/// dataset) so that one-hot positions stay consistent across splits.
///
/// ## Arguments
/// * `labels` - The ordered, deduplicated label names.
///
/// ## Returns
/// The label [`VocabIndex`].
pub fn build_lang_vocab(labels: &[String]) -> VocabIndex {
    log::info!("Building label vocabulary: {} labels", labels.len());

    VocabIndex::from_symbols(labels.to_vec())
}
