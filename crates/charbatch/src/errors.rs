//! # Error Types

/// Errors from charbatch operations.
#[derive(Debug, thiserror::Error)]
pub enum CharbatchError {
    /// A record's index sequence does not fit the configured row width.
    ///
    /// This aborts the whole vectorization pass; downstream fixed-width
    /// grids cannot accommodate a single oversized row.
    #[error("longest sequence ({longest}) exceeds the row limit ({limit})")]
    SequenceOverflow {
        /// The longest index sequence observed across all records.
        longest: usize,

        /// The configured row width.
        limit: usize,
    },

    /// Vocabulary lookup miss.
    #[error("symbol not found in vocabulary: {0:?}")]
    SymbolNotFound(String),

    /// A labeled TSV line without a text column.
    #[error("malformed record at line {line}: expected label<TAB>text")]
    MalformedRecord {
        /// 1-based line number of the offending record.
        line: usize,
    },

    /// A batch request that cannot be filled within one wraparound.
    #[error("batch of {requested} cannot be filled from {num_records} records in one wraparound")]
    BatchExhausted {
        /// The requested batch size.
        requested: usize,

        /// The number of records in the dataset.
        num_records: usize,
    },

    /// Embedding value that does not parse as a float.
    #[error("invalid embedding value: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for charbatch operations.
pub type CBResult<T> = core::result::Result<T, CharbatchError>;
