//! Daily Quote CLI
//!
//! Usage:
//!   daily-quote [OPTIONS]
//!
//! Options:
//!   -d, --dir <DIR>          Directory holding the quotes and the document
//!   -q, --quotes <FILE>      Quotes file (JSON)
//!   -r, --readme <FILE>      Document with quote markers
//!   -o, --output <FILE>      Image file name
//!   -c, --config <FILE>      Settings file (TOML format)
//!   -s, --stylesheet <FILE>  Stylesheet file for colors and fonts (TOML format)
//!       --seed <N>           Seed for quote selection
//!       --print              Print the SVG instead of writing files
//!   -v, --verbose            More log output (repeatable)
//!   -h, --help               Print help

use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use daily_quote::{
    render_with_config, update_document, Error, FsWorkspace, QuoteBook, RenderConfig, SeededRng,
    Settings, Stylesheet,
};

#[derive(Parser)]
#[command(name = "daily-quote")]
#[command(about = "Render a random quote as an SVG and link it from a README")]
struct Cli {
    /// Directory holding the quotes file and the document
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Quotes file (JSON array of {"quote", "author"})
    #[arg(short, long)]
    quotes: Option<PathBuf>,

    /// Document containing the quote markers
    #[arg(short, long)]
    readme: Option<PathBuf>,

    /// Image file name, written next to the document
    #[arg(short, long)]
    output: Option<String>,

    /// Settings file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stylesheet file for colors and fonts (TOML format)
    #[arg(short, long)]
    stylesheet: Option<PathBuf>,

    /// Seed for quote selection (defaults to the clock)
    #[arg(long)]
    seed: Option<u64>,

    /// Print the rendered SVG to stdout and write nothing
    #[arg(long)]
    print: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("daily_quote={}", level))),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<(), Error> {
    let mut settings = match &cli.config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };
    if let Some(quotes) = cli.quotes {
        settings.quotes_file = quotes;
    }
    if let Some(readme) = cli.readme {
        settings.document_file = readme;
    }
    if let Some(output) = cli.output {
        settings.image_file = output;
    }

    let stylesheet = match &cli.stylesheet {
        Some(path) => Stylesheet::from_file(path)?,
        None => Stylesheet::default(),
    };
    let config = RenderConfig::new()
        .with_layout(settings.layout.clone())
        .with_svg(settings.svg.clone())
        .with_stylesheet(stylesheet);

    let mut workspace = FsWorkspace::new(&cli.dir);
    let book = QuoteBook::load(&workspace, &settings.quotes_file)?;

    let mut rng = match cli.seed {
        Some(seed) => SeededRng::new(seed),
        None => SeededRng::from_time(),
    };
    let quote = book.choose(&mut rng);
    info!(author = %quote.author, total = book.len(), "selected quote");

    if cli.print {
        println!("{}", render_with_config(&quote.quote, &quote.author, &config));
        return Ok(());
    }

    let update = update_document(&mut workspace, quote, &settings, &config)?;
    println!(
        "\u{2705} Updated quote: \"{}\" - {}",
        update.quote.quote, update.quote.author
    );
    Ok(())
}
