//! # Pretrained Vector Loading
//!
//! Loader for whitespace-separated `symbol dim0 dim1 ...` vector files, as
//! exchanged with the external classifier.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::errors::CBResult;

/// Embedding widths accepted from pretrained vector files.
pub const ACCEPTED_DIMENSIONS: [usize; 4] = [25, 50, 100, 200];

/// A symbol list with dense float embeddings.
#[derive(Debug, Clone, Default)]
pub struct VocabVectors {
    symbols: Vec<String>,
    embeddings: Vec<Vec<f32>>,
    dimension: usize,
}

impl VocabVectors {
    /// Load pretrained vectors from a file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> CBResult<Self> {
        let path = path.as_ref();
        log::info!("Loading vectors: {}", path.display());

        let loaded = Self::from_reader(BufReader::new(File::open(path)?))?;

        log::info!(
            "{} loaded: {} symbols, dimension {}",
            path.display(),
            loaded.len(),
            loaded.dimension(),
        );
        Ok(loaded)
    }

    /// Load pretrained vectors from a reader.
    ///
    /// Each line holds a symbol followed by its embedding values, separated
    /// by whitespace. A line whose embedding width is not one of
    /// [`ACCEPTED_DIMENSIONS`] is skipped silently; a value that does not
    /// parse as a float fails the load.
    pub fn from_reader<R: BufRead>(reader: R) -> CBResult<Self> {
        let mut symbols = Vec::new();
        let mut embeddings: Vec<Vec<f32>> = Vec::new();
        let mut dimension = 0;

        for line in reader.lines() {
            let line = line?;
            let mut fields = line.split_whitespace();
            let Some(symbol) = fields.next() else {
                continue;
            };

            let values = fields.collect::<Vec<_>>();
            if !ACCEPTED_DIMENSIONS.contains(&values.len()) {
                continue;
            }

            let row = values
                .into_iter()
                .map(str::parse::<f32>)
                .collect::<Result<Vec<f32>, _>>()?;

            if embeddings.is_empty() {
                dimension = row.len();
            }
            symbols.push(symbol.to_string());
            embeddings.push(row);
        }

        Ok(Self {
            symbols,
            embeddings,
            dimension,
        })
    }

    /// Symbols in file order.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// One embedding row per symbol.
    pub fn embeddings(&self) -> &[Vec<f32>] {
        &self.embeddings
    }

    /// The embedding width.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The number of loaded symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether anything was loaded.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
