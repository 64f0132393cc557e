//! End-to-end pipeline coverage: load, build vocabularies, vectorize, batch.

use std::fs::File;
use std::io::Write;

use tempdir::TempDir;

use charbatch::dataset::{RowFill, VectorizeOptions};
use charbatch::records::{TsvReader, TsvReaderOptions};
use charbatch::vocab::{END_SYMBOL, START_SYMBOL, build_lang_vocab, build_text_vocab};
use charbatch::{CBResult, ClassifierConfig};

/// A corpus where "ab" reaches the frequency cutoff in both languages.
const TRAIN_LINES: usize = 12;

fn write_train_file(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("train.tsv");
    let mut file = File::create(&path).unwrap();
    for i in 0..TRAIN_LINES {
        let label = if i % 2 == 0 { "en" } else { "es" };
        writeln!(file, "{label}\tab ab").unwrap();
    }
    path
}

#[test]
fn test_train_pipeline() -> CBResult<()> {
    let tmp = TempDir::new("charbatch-pipeline").unwrap();
    let train_path = write_train_file(&tmp);

    let reader = TsvReader::default();
    let train = reader.read_path(&train_path)?;

    assert_eq!(train.num_records(), TRAIN_LINES);
    assert_eq!(train.label_list(), &["en".to_string(), "es".to_string()]);

    // "a" and "b" each occur 24 times; nothing is pruned.
    let text_vocab = build_text_vocab(train.text());
    assert_eq!(text_vocab.len(), 5);
    assert_eq!(text_vocab.dimension(), 3);

    let lang_vocab = build_lang_vocab(train.label_list());
    assert_eq!(lang_vocab.len(), 2);

    let options = VectorizeOptions::default()
        .with_max_chars_limit(10)
        .with_row_fill(RowFill::Exact);
    let mut vectorized = train.vectorize(&text_vocab, &options)?;

    assert_eq!(vectorized.num_records(), TRAIN_LINES);
    assert_eq!(vectorized.num_classes(), 2);
    assert_eq!(vectorized.max_text_length(), 10);

    // Every row: <S>, a, b, a, b, </S>, then end padding.
    let start = text_vocab.position(START_SYMBOL)? as u32;
    let end = text_vocab.position(END_SYMBOL)? as u32;
    let a = text_vocab.position("a")? as u32;
    let b = text_vocab.position("b")? as u32;
    for row in vectorized.text() {
        assert_eq!(row, &vec![start, a, b, a, b, end, end, end, end, end]);
    }

    // Alternating labels one-hot over ["en", "es"].
    assert_eq!(vectorized.labels()[0], vec![1, 0]);
    assert_eq!(vectorized.labels()[1], vec![0, 1]);

    let config = ClassifierConfig {
        batch_size: 5,
        lstm_units: 12,
        epochs: 1,
        num_classes: vectorized.num_classes(),
        max_seq_length: vectorized.max_text_length(),
        num_dimensions: text_vocab.dimension(),
    };
    assert_eq!(config.max_seq_length, 10);
    assert_eq!(config.num_dimensions, 3);

    // Batches of 5 over 12 records: the third call wraps.
    vectorized.reset_epoch(false);
    for expected_wrap in [false, false, true] {
        let (rows, one_hot) = vectorized.next_batch(config.batch_size)?;
        assert_eq!(rows.len(), 5);
        assert_eq!(one_hot.len(), 5);
        assert_eq!(vectorized.epoch_completed(), expected_wrap);
    }

    Ok(())
}

#[test]
fn test_validation_split_reuses_training_label_order() -> CBResult<()> {
    let train_reader = TsvReader::default();
    let train = train_reader.read(std::io::Cursor::new("en\thello\nes\tmundo\n"))?;

    // The validation file happens to see "es" first; the training list
    // keeps one-hot positions aligned anyway.
    let val_reader =
        TsvReader::new(TsvReaderOptions::default().with_label_list(train.label_list().to_vec()));
    let val = val_reader.read(std::io::Cursor::new("es\tadios\nen\tbye\n"))?;

    let text_vocab = build_text_vocab(train.text());
    let vectorized = val.vectorize(&text_vocab, &VectorizeOptions::default())?;

    assert_eq!(vectorized.labels()[0], vec![0, 1]);
    assert_eq!(vectorized.labels()[1], vec![1, 0]);
    Ok(())
}

#[test]
fn test_unlabeled_test_split() -> CBResult<()> {
    let train_reader = TsvReader::default();
    let train = train_reader.read(std::io::Cursor::new("en\thello\nes\tmundo\n"))?;

    let test_reader = TsvReader::new(TsvReaderOptions::default().with_labeled(false));
    let test = test_reader.read(std::io::Cursor::new("some line\nanother line\n"))?;

    assert_eq!(test.num_records(), 2);
    assert!(test.labels().is_empty());

    let text_vocab = build_text_vocab(train.text());
    let mut vectorized = test.vectorize(&text_vocab, &VectorizeOptions::default())?;

    let (rows, one_hot) = vectorized.next_batch(2)?;
    assert_eq!(rows.len(), 2);
    assert!(one_hot.is_empty());
    Ok(())
}
