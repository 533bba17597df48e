use log_visits::BenchConfig;
use log_visits::bench;
use tracing::Level;
use xxhash_rust::xxh64::Xxh64Builder;

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so stdout carries only the report.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::INFO)
        .init();

    let config = BenchConfig::default();

    // The baseline map uses the Xxh64 hash function.
    // Any other BuildHasher works, e.g. the default RandomState:
    // let report = bench::run::<RandomState>(&config)?;
    let report = bench::run::<Xxh64Builder>(&config)?;
    print!("{}", report);

    Ok(())
}
