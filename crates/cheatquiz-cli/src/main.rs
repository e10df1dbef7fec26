//! cheatquiz CLI — practice a markdown cheatsheet as a terminal quiz.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cheatquiz_core::GameMode;

mod commands;

#[derive(Parser)]
#[command(
    name = "cheatquiz",
    version,
    about = "Flashcard quiz over a markdown cheatsheet"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a quiz session (the default)
    Play(PlayArgs),

    /// Export the parsed questions as JSON
    Export {
        /// Markdown cheatsheet (default: ./vim-cheatsheet.md)
        #[arg(long)]
        source: Option<PathBuf>,

        /// Output file
        #[arg(long, default_value = "data.json")]
        output: PathBuf,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check a cheatsheet and summarize its categories
    Validate {
        /// Markdown cheatsheet (default: ./vim-cheatsheet.md)
        #[arg(long)]
        source: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter cheatsheet and config
    Init,
}

#[derive(Args, Default)]
pub struct PlayArgs {
    /// Markdown cheatsheet (default: ./vim-cheatsheet.md)
    #[arg(long)]
    source: Option<PathBuf>,

    /// Shuffle seed, for a repeatable question order
    #[arg(long)]
    seed: Option<u64>,

    /// Round length: flash (10), regular (50), all
    #[arg(long)]
    mode: Option<GameMode>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    fn no_color(&self) -> bool {
        matches!(&self.command, Some(Commands::Play(args)) if args.no_color)
    }
}

/// Log to stderr. `RUST_LOG` replaces the default filter rather than adding
/// to it, so `RUST_LOG=cheatquiz=debug` is not shadowed by `cheatquiz=warn`.
fn init_tracing(no_color: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cheatquiz=warn"));
    let ansi = !no_color
        && std::env::var_os("NO_COLOR").is_none()
        && std::io::stderr().is_terminal();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_env_filter(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.no_color());

    let result = match cli.command {
        None => commands::play::execute(PlayArgs::default()),
        Some(Commands::Play(args)) => commands::play::execute(args),
        Some(Commands::Export {
            source,
            output,
            config,
        }) => commands::export::execute(source, output, config),
        Some(Commands::Validate { source, config }) => commands::validate::execute(source, config),
        Some(Commands::Init) => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
