//! # Datasets
//!
//! Record containers and the batch-iteration state machine.
//!
//! Datasets move through a one-way state transition:
//! * [`RawDataset`] - cleaned text plus raw labels, as loaded.
//! * [`VectorizedDataset`] - fixed-width index rows plus one-hot labels,
//!   produced by [`RawDataset::vectorize`]. Never reversible.
//!
//! Batch iteration lives on the vectorized side; see
//! [`VectorizedDataset::next_batch`].

pub mod raw_dataset;
pub mod vectorized_dataset;

#[doc(inline)]
pub use raw_dataset::{RawDataset, RowFill, VectorizeOptions};
#[doc(inline)]
pub use vectorized_dataset::VectorizedDataset;
