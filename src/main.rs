use std::path::PathBuf;

use clap::{
    Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};

use lyrdl::{cli, config, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Song name to search for
    #[clap(required = true, num_args = 1..)]
    song: Vec<String>,

    /// Artist name (included in the search query)
    #[clap(short, long)]
    artist: Option<String>,

    /// Output directory for saved lyrics
    #[clap(short, long, default_value = "src/content/songs")]
    output: PathBuf,

    /// Print lyrics to stdout instead of saving to a file
    #[clap(long)]
    print_only: bool,

    /// Skip interactive selection and use the first result
    #[clap(long)]
    first: bool,

    /// Number of search results to show
    #[clap(short = 'n', long, default_value_t = 10)]
    num_results: usize,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    cli::download(
        cli.song,
        cli.artist,
        cli.output,
        cli.print_only,
        cli.first,
        cli.num_results,
    )
    .await;
}
