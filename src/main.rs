use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use span_split::space::CountingAllocator;
use span_split::{
    collect_ranges, run_comparison, CompareConfig, ComparisonReport, Separator, Variant,
};
use tracing_subscriber::EnvFilter;

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator;

#[derive(Parser, Debug)]
#[command(name = "span-split", about = "Zero-allocation range splitting and variant comparison")]
struct Cli {
    /// Log at debug level unless RUST_LOG is set.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the ranges produced by splitting TEXT.
    Ranges {
        /// Text to split.
        text: String,
        /// Separator; one byte splits on an element, longer splits on a subsequence.
        #[arg(short, long, default_value = ",")]
        separator: String,
        /// Algorithm to use (simple, general, biased).
        #[arg(long, default_value_t = Variant::Biased)]
        variant: Variant,
    },
    /// Time every variant on the built-in test cases.
    Compare {
        /// Timed passes per variant and case.
        #[arg(long, default_value_t = 100_000)]
        iterations: usize,
        /// Untimed passes before timing.
        #[arg(long, default_value_t = 10_000)]
        warmup: usize,
        /// Test case index (repeatable); defaults to all.
        #[arg(long = "case")]
        cases: Vec<usize>,
        /// Emit the report as JSON (needs the `serde` feature).
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Ranges {
            text,
            separator,
            variant,
        } => run_ranges(&text, &separator, variant)?,
        Commands::Compare {
            iterations,
            warmup,
            cases,
            json,
        } => {
            let mut config = CompareConfig::new(iterations)
                .context("invalid iteration count")?
                .with_warmup(warmup);
            if !cases.is_empty() {
                config = config.with_cases(cases).context("invalid test case selection")?;
            }
            let report = run_comparison(&config).context("comparison failed")?;

            if json {
                print_json(&report)?;
            } else {
                print!("{}", report.render());
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_ranges(text: &str, separator: &str, variant: Variant) -> Result<()> {
    let bytes = text.as_bytes();
    let separator = match separator.as_bytes() {
        [] => bail!("separator must not be empty"),
        [single] => Separator::element(*single),
        many => Separator::sequence(many)?,
    };

    let ranges = collect_ranges(variant, bytes, separator)
        .with_context(|| format!("cannot split with the {variant} variant"))?;
    for range in ranges {
        println!(
            "{}..{}\t{}",
            range.start,
            range.end,
            String::from_utf8_lossy(&bytes[range.clone()])
        );
    }

    Ok(())
}

#[cfg(feature = "serde")]
fn print_json(report: &ComparisonReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

#[cfg(not(feature = "serde"))]
fn print_json(_report: &ComparisonReport) -> Result<()> {
    bail!("JSON output requires building with the `serde` feature")
}
