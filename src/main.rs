use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use simrec_core::{AssertionLevel, Pipeline, PipelineConfig};

/// Batch author-similarity recommender
#[derive(Parser, Debug)]
#[command(name = "simrec")]
#[command(about = "Recommend similar authors from shared vocabulary", long_about = None)]
struct Args {
    /// Posts source (TSV with header: author_id, text)
    #[arg(long)]
    posts: PathBuf,

    /// Stop-word source (TSV with header: stop)
    #[arg(long)]
    stopwords: PathBuf,

    /// Token-frequency report sink (TSV, replaced each run)
    #[arg(long)]
    token_freq_out: PathBuf,

    /// Similarity results sink (TSV, replaced each run)
    #[arg(long)]
    similarity_out: PathBuf,

    /// Minimum shared tokens for a pair to be scored
    #[arg(long, default_value_t = 4)]
    min_common_tokens: u64,

    /// Lower similarity bound, exclusive
    #[arg(long, default_value_t = 0.010)]
    min_similarity: f64,

    /// Upper similarity bound, exclusive
    #[arg(long, default_value_t = 0.990)]
    max_similarity: f64,

    /// Skip posts failing the length assertion instead of aborting
    #[arg(long)]
    lenient: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting simrec v{}", env!("CARGO_PKG_VERSION"));

    let config = PipelineConfig {
        min_common_tokens: args.min_common_tokens,
        min_similarity: args.min_similarity,
        max_similarity: args.max_similarity,
        assertion_level: if args.lenient {
            AssertionLevel::Lenient
        } else {
            AssertionLevel::Strict
        },
        ..PipelineConfig::default()
    };
    let pipeline = Pipeline::new(config)?;

    let stop_words = simrec_io::read_stop_words(&args.stopwords)?;
    let posts = simrec_io::read_posts(&args.posts)?;
    info!(
        "Read {} posts and {} stop words",
        posts.len(),
        stop_words.len()
    );

    let output = pipeline.run(&posts, &stop_words)?;
    info!(
        "Computed {} token frequencies and {} recommendations",
        output.token_counts.len(),
        output.similarities.len()
    );

    // The token-frequency report is an independent diagnostic branch; a
    // failure here must not take down the similarity output.
    if let Err(e) = simrec_io::write_token_counts(&args.token_freq_out, &output.token_counts) {
        warn!("Token-frequency report failed: {}", e);
    } else {
        info!("Token frequencies written to {:?}", args.token_freq_out);
    }

    simrec_io::write_similarities(&args.similarity_out, &output.similarities)?;
    info!("Similarity results written to {:?}", args.similarity_out);

    Ok(())
}
