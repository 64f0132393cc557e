//! # Record Loading
//!
//! Tab-separated record loading with text normalization.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::dataset::RawDataset;
use crate::errors::{CBResult, CharbatchError};
use crate::normalize::TextNormalizer;

/// Options for [`TsvReader`].
#[derive(Debug, Clone)]
pub struct TsvReaderOptions {
    /// Whether column 0 carries a label. Unlabeled (test) input treats the
    /// whole line as raw text.
    pub labeled: bool,

    /// An explicit label list. Validation and test splits pass the training
    /// split's list here so one-hot positions line up; when absent, labeled
    /// input derives its list from the labels in first-seen order.
    pub label_list: Option<Vec<String>>,
}

impl Default for TsvReaderOptions {
    fn default() -> Self {
        Self {
            labeled: true,
            label_list: None,
        }
    }
}

impl TsvReaderOptions {
    /// Set whether column 0 carries a label.
    pub fn with_labeled(
        self,
        labeled: bool,
    ) -> Self {
        Self { labeled, ..self }
    }

    /// Set an explicit label list.
    pub fn with_label_list(
        self,
        label_list: Vec<String>,
    ) -> Self {
        Self {
            label_list: Some(label_list),
            ..self
        }
    }
}

/// Reader for line-delimited, tab-separated records.
///
/// In labeled mode column 0 is the label and column 1 the raw text; extra
/// columns are ignored. Every text column is passed through the
/// [`TextNormalizer`] before it lands in the dataset.
#[derive(Debug, Default)]
pub struct TsvReader {
    options: TsvReaderOptions,
    normalizer: TextNormalizer,
}

impl TsvReader {
    /// Create a reader with the given options.
    pub fn new(options: TsvReaderOptions) -> Self {
        Self {
            options,
            normalizer: TextNormalizer::new(),
        }
    }

    /// Load records from a file.
    pub fn read_path<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> CBResult<RawDataset> {
        let path = path.as_ref();
        log::info!("Loading file: {}", path.display());

        let data = self.read(BufReader::new(File::open(path)?))?;

        log::info!("{} loaded: {} records", path.display(), data.num_records());
        Ok(data)
    }

    /// Load records from a reader.
    ///
    /// ## Arguments
    /// * `reader` - The line-delimited source.
    ///
    /// ## Returns
    /// The loaded [`RawDataset`], or [`CharbatchError::MalformedRecord`] on
    /// the first labeled line without a text column — a structural failure
    /// aborts the whole load rather than dropping rows silently.
    pub fn read<R: BufRead>(
        &self,
        reader: R,
    ) -> CBResult<RawDataset> {
        let mut text = Vec::new();
        let mut labels = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();

            if self.options.labeled {
                let mut columns = line.split('\t');
                let label = columns.next().unwrap_or_default();
                let raw = columns
                    .next()
                    .ok_or(CharbatchError::MalformedRecord { line: line_num + 1 })?;

                labels.push(label.to_string());
                text.push(self.normalizer.normalize(raw));
            } else {
                text.push(self.normalizer.normalize(line));
            }
        }

        let label_list = match &self.options.label_list {
            Some(list) => list.clone(),
            None => first_seen_labels(&labels),
        };

        Ok(RawDataset::new(text, labels, label_list))
    }
}

/// Deduplicate labels, keeping first-occurrence order.
fn first_seen_labels(labels: &[String]) -> Vec<String> {
    let mut list: Vec<String> = Vec::new();
    for label in labels {
        if !list.contains(label) {
            list.push(label.clone());
        }
    }
    list
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::io::Write;

    use tempdir::TempDir;

    use super::*;

    #[test]
    fn test_labeled_two_line_file() {
        let reader = TsvReader::default();
        let data = reader.read(Cursor::new("en\thello\nes\tworld\n")).unwrap();

        assert_eq!(data.num_records(), 2);
        assert_eq!(data.text(), &["hello".to_string(), "world".to_string()]);
        assert_eq!(data.labels(), &["en".to_string(), "es".to_string()]);
        assert_eq!(data.label_list(), &["en".to_string(), "es".to_string()]);
    }

    #[test]
    fn test_label_list_keeps_first_seen_order() {
        let reader = TsvReader::default();
        let data = reader
            .read(Cursor::new("es\tuno\nen\tone\nes\tdos\nen\ttwo\n"))
            .unwrap();

        assert_eq!(data.label_list(), &["es".to_string(), "en".to_string()]);
    }

    #[test]
    fn test_explicit_label_list_overrides() {
        let reader = TsvReader::new(
            TsvReaderOptions::default().with_label_list(vec!["en".to_string(), "es".to_string()]),
        );
        let data = reader.read(Cursor::new("es\thola\n")).unwrap();

        assert_eq!(data.label_list(), &["en".to_string(), "es".to_string()]);
    }

    #[test]
    fn test_text_column_is_normalized() {
        let reader = TsvReader::default();
        let data = reader
            .read(Cursor::new("en\t@bob check https://example.com/x\n"))
            .unwrap();

        assert_eq!(data.text()[0], "  check ");
    }

    #[test]
    fn test_malformed_line_fails_the_load() {
        let reader = TsvReader::default();
        let err = reader
            .read(Cursor::new("en\thello\nno-tab-here\n"))
            .unwrap_err();

        assert!(matches!(err, CharbatchError::MalformedRecord { line: 2 }));
    }

    #[test]
    fn test_unlabeled_mode() {
        let reader = TsvReader::new(TsvReaderOptions::default().with_labeled(false));
        let data = reader.read(Cursor::new("hello there\nworld\n")).unwrap();

        assert_eq!(data.num_records(), 2);
        assert!(data.labels().is_empty());
        assert!(data.label_list().is_empty());
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let reader = TsvReader::default();
        let data = reader.read(Cursor::new("en\thello\textra\n")).unwrap();

        assert_eq!(data.text(), &["hello".to_string()]);
    }

    #[test]
    fn test_read_path() {
        let tmp = TempDir::new("charbatch-records").unwrap();
        let path = tmp.path().join("train.tsv");
        let mut file = File::create(&path).unwrap();
        write!(file, "en\thello\nes\tmundo\n").unwrap();

        let data = TsvReader::default().read_path(&path).unwrap();
        assert_eq!(data.num_records(), 2);
    }
}
