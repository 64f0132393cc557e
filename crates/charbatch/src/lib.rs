//! # `charbatch` Classification Data Prep
//!
//! Preparation of character-level text-classification data: TSV record
//! loading, social-media text cleanup, frequency-pruned character
//! vocabularies with deterministic binary codes, fixed-width vectorization,
//! and shuffled mini-batch iteration across epochs.
//!
//! See:
//! * [`records`] to load tab-separated corpora.
//! * [`normalize`] for the line cleanup contract.
//! * [`vocab`] to build character and label vocabularies.
//! * [`dataset`] for vectorization and the batch state machine.
//! * [`vectors`] to load pretrained embedding files.
//! * [`classifier`] for the external model boundary.
//!
//! The pipeline, end to end:
//!
//! ```rust
//! use charbatch::dataset::VectorizeOptions;
//! use charbatch::records::TsvReader;
//! use charbatch::vocab::{build_lang_vocab, build_text_vocab};
//!
//! # fn main() -> charbatch::CBResult<()> {
//! let reader = TsvReader::default();
//! let train = reader.read(std::io::Cursor::new("en\thello\nes\tmundo\n"))?;
//!
//! let text_vocab = build_text_vocab(train.text());
//! let lang_vocab = build_lang_vocab(train.label_list());
//!
//! let mut vectorized = train.vectorize(&text_vocab, &VectorizeOptions::default())?;
//! vectorized.reset_epoch(true);
//! let (rows, one_hot) = vectorized.next_batch(2)?;
//! # assert_eq!(rows.len(), 2);
//! # assert_eq!(one_hot.len(), 2);
//! # let _ = lang_vocab;
//! # Ok(())
//! # }
//! ```
#![warn(missing_docs)]

pub mod classifier;
pub mod dataset;
pub mod errors;
pub mod normalize;
pub mod records;
pub mod types;
pub mod vectors;
pub mod vocab;

#[doc(inline)]
pub use classifier::{Classifier, ClassifierConfig};
#[doc(inline)]
pub use dataset::{RawDataset, RowFill, VectorizeOptions, VectorizedDataset};
#[doc(inline)]
pub use errors::{CBResult, CharbatchError};
#[doc(inline)]
pub use normalize::TextNormalizer;
#[doc(inline)]
pub use records::{TsvReader, TsvReaderOptions};
#[doc(inline)]
pub use vectors::VocabVectors;
#[doc(inline)]
pub use vocab::{VocabIndex, build_lang_vocab, build_text_vocab};
