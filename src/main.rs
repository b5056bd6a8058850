use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use groovebot::{cli, config, error};

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
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API and print a refresh token
    Auth,

    /// Sync every music link of one message into the playlist
    Sync(SyncOptions),

    /// Read messages from stdin, one per line, and sync their links
    Watch,

    /// Resolve a single link to a Spotify track without syncing it
    Resolve(ResolveOptions),

    /// Show how a video title is split into artist and song
    Normalize(NormalizeOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SyncOptions {
    /// Message text; multiple words are joined with spaces
    #[clap(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ResolveOptions {
    /// Video or track link
    pub url: String,

    /// Video title to use instead of asking yt-dlp
    #[clap(long)]
    pub title: Option<String>,

    /// Uploader name used as artist fallback
    #[clap(long, requires = "title")]
    pub uploader: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct NormalizeOptions {
    /// Raw video title
    pub title: String,

    /// Uploader name used as artist fallback
    #[clap(long)]
    pub uploader: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => cli::auth().await,
        Command::Sync(opt) => cli::sync_message(opt.text.join(" ")).await,
        Command::Watch => cli::watch().await,
        Command::Resolve(opt) => cli::resolve(opt.url, opt.title, opt.uploader).await,
        Command::Normalize(opt) => cli::normalize(opt.title, opt.uploader),
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
