//! # Classifier Boundary
//!
//! The training side of this crate ends at a trait: batches of fixed-width
//! index rows and one-hot label rows go out, predictions and accuracy come
//! back. No model ships here.

use crate::dataset::VectorizedDataset;
use crate::errors::CBResult;

/// Hyperparameters handed to the external classifier.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Records per training batch.
    pub batch_size: usize,

    /// Recurrent units in the external model.
    pub lstm_units: usize,

    /// Training epochs to run.
    pub epochs: usize,

    /// The number of label classes.
    pub num_classes: usize,

    /// The fixed row width of vectorized text.
    pub max_seq_length: usize,

    /// The embedding width of the character vocabulary codes.
    pub num_dimensions: usize,
}

impl ClassifierConfig {
    /// Log every field at info level.
    pub fn log_summary(&self) {
        log::info!("Configuration:");
        log::info!("batch_size : {}", self.batch_size);
        log::info!("lstm_units : {}", self.lstm_units);
        log::info!("epochs : {}", self.epochs);
        log::info!("num_classes : {}", self.num_classes);
        log::info!("max_seq_length : {}", self.max_seq_length);
        log::info!("num_dimensions : {}", self.num_dimensions);
    }
}

/// The external classification model.
///
/// Implementations consume [`VectorizedDataset`] batches; this crate only
/// prepares the data and drives the epoch loop.
pub trait Classifier {
    /// Run one training epoch over the dataset.
    fn fit_epoch(
        &mut self,
        data: &mut VectorizedDataset,
        epoch: usize,
    ) -> CBResult<()>;

    /// Predict a class position for every record.
    fn predict(
        &self,
        data: &VectorizedDataset,
    ) -> CBResult<Vec<usize>>;

    /// Fraction of records predicted correctly.
    fn accuracy(
        &self,
        data: &VectorizedDataset,
    ) -> CBResult<f64>;
}
