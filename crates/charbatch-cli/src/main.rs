mod logging;

use std::path::PathBuf;

use clap::Parser;

use charbatch::dataset::{RowFill, VectorizeOptions, VectorizedDataset};
use charbatch::records::{TsvReader, TsvReaderOptions};
use charbatch::vectors::VocabVectors;
use charbatch::vocab::{TextVocabOptions, build_lang_vocab, build_text_vocab_with};
use charbatch::{ClassifierConfig, VocabIndex};

use logging::LogArgs;

/// Prepare character-level classification data from tab-separated corpora.
#[derive(clap::Parser, Debug)]
pub struct Args {
    /// Training file (label<TAB>text per line).
    train: PathBuf,

    /// Validation file; reuses the training label ordering.
    validation: Option<PathBuf>,

    /// Test file (raw text per line, no labels).
    test: Option<PathBuf>,

    /// Fixed row width for vectorized text.
    #[arg(long, default_value = "150")]
    max_chars: usize,

    /// Minimum corpus frequency for a character to be kept.
    #[arg(long, default_value = "10")]
    min_char_count: u32,

    /// Records per training batch.
    #[arg(long, default_value = "4000")]
    batch_size: usize,

    /// Epochs to drive over the training set.
    #[arg(long, default_value = "1")]
    epochs: usize,

    /// Recurrent units reported to the classifier boundary.
    #[arg(long, default_value = "12")]
    lstm_units: usize,

    /// Write rows exactly instead of the legacy end-marker overrun.
    #[arg(long)]
    exact_rows: bool,

    /// Pretrained vector file to load and report on.
    #[arg(long)]
    vectors: Option<PathBuf>,

    #[clap(flatten)]
    logging: LogArgs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    args.logging.setup_logging()?;

    run(&args)
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let train = TsvReader::default().read_path(&args.train)?;

    let text_vocab = build_text_vocab_with(
        train.text(),
        TextVocabOptions::default().with_min_count(args.min_char_count),
    );
    let lang_vocab = build_lang_vocab(train.label_list());
    log::info!(
        "Text vocabulary: {} symbols, dimension {}",
        text_vocab.len(),
        text_vocab.dimension(),
    );
    log::info!(
        "Label vocabulary: {} labels, dimension {}",
        lang_vocab.len(),
        lang_vocab.dimension(),
    );

    if let Some(path) = &args.vectors {
        let vectors = VocabVectors::from_path(path)?;
        log::info!(
            "Pretrained vectors: {} symbols, dimension {}",
            vectors.len(),
            vectors.dimension(),
        );
    }

    let options = VectorizeOptions::default()
        .with_max_chars_limit(args.max_chars)
        .with_row_fill(if args.exact_rows {
            RowFill::Exact
        } else {
            RowFill::EndMarkerOverrun
        });

    let mut train_vec = train.vectorize(&text_vocab, &options)?;

    let config = ClassifierConfig {
        batch_size: args.batch_size,
        lstm_units: args.lstm_units,
        epochs: args.epochs,
        num_classes: train_vec.num_classes(),
        max_seq_length: train_vec.max_text_length(),
        num_dimensions: text_vocab.dimension(),
    };
    config.log_summary();

    if let Some(path) = &args.validation {
        let reader =
            TsvReader::new(TsvReaderOptions::default().with_label_list(train.label_list().to_vec()));
        let validation = reader.read_path(path)?;
        let validation_vec = validation.vectorize(&text_vocab, &options)?;
        log::info!(
            "Validation: {} records, {} classes",
            validation_vec.num_records(),
            validation_vec.num_classes(),
        );
    }

    if let Some(path) = &args.test {
        let reader = TsvReader::new(
            TsvReaderOptions::default()
                .with_labeled(false)
                .with_label_list(train.label_list().to_vec()),
        );
        let test = reader.read_path(path)?;
        let test_vec = test.vectorize(&text_vocab, &options)?;
        log::info!("Test: {} records", test_vec.num_records());
    }

    drive_epochs(&mut train_vec, &config, &text_vocab)?;

    Ok(())
}

/// Walk the training set through the configured epochs, batch by batch,
/// the way the external classifier would consume it.
fn drive_epochs(
    data: &mut VectorizedDataset,
    config: &ClassifierConfig,
    text_vocab: &VocabIndex,
) -> Result<(), Box<dyn std::error::Error>> {
    let num_records = data.num_records();
    if num_records == 0 {
        log::warn!("No training records; nothing to batch");
        return Ok(());
    }

    let batch_size = config.batch_size.min(num_records);
    if batch_size < config.batch_size {
        log::info!(
            "Batch size {} clamped to the record count {}",
            config.batch_size,
            num_records,
        );
    }

    let batches_per_epoch = num_records.div_ceil(batch_size);
    log::info!(
        "Driving {} epochs of {} batches over {} records ({} symbols)",
        config.epochs,
        batches_per_epoch,
        num_records,
        text_vocab.len(),
    );

    for epoch in 0..config.epochs {
        data.reset_epoch(true);
        for _ in 0..batches_per_epoch {
            let (rows, one_hot) = data.next_batch(batch_size)?;
            log::debug!(
                "epoch {}: batch of {} rows, {} label rows",
                epoch,
                rows.len(),
                one_hot.len(),
            );
        }
        log::info!(
            "epoch {}: {} batches served, epoch_completed = {}",
            epoch,
            batches_per_epoch,
            data.epoch_completed(),
        );
    }

    Ok(())
}
