use clap::Parser;
use framebatch::{LineReader, ReaderConfig, RecordReader};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Read a text source as fixed-size line batches
#[derive(Parser)]
#[command(name = "framebatch", version)]
struct Args {
    /// Path to the source file
    source: String,

    /// Lines per batch
    #[arg(short, long, default_value_t = 1)]
    batch_size: usize,

    /// Leading lines to skip before the first batch
    #[arg(short, long)]
    offset: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut config = ReaderConfig::new(&args.source).batch_size(args.batch_size);
    if let Some(offset) = args.offset {
        config = config.offset(offset);
    }

    let start = Instant::now();
    let mut reader = LineReader::new(config);
    let mut batch_count = 0usize;
    let mut record_count = 0usize;

    for batch in reader.batches() {
        let batch = batch?;
        batch_count += 1;
        record_count += batch.len();
        println!("batch {:>4}: {} lines", batch_count, batch.len());
    }

    println!(
        "✓ {} lines in {} batches [{:.2}s]",
        record_count,
        batch_count,
        start.elapsed().as_secs_f64()
    );

    Ok(())
}
