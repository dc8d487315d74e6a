use crate::prelude::*;
use clap::Parser;

mod client;
mod error;
mod generate;
mod panel;
mod prelude;
mod scan;
mod scanner;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Generate SDK utility files into a workspace using a hosted chat-completion model"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Workspace root the generated file and context scan are relative to.
    /// Defaults to the current directory.
    #[clap(long, env = "SDKGEN_WORKSPACE", global = true)]
    workspace: Option<std::path::PathBuf>,

    /// Chat-completion endpoint URL
    #[clap(
        long,
        env = "SDKGEN_API_URL",
        global = true,
        default_value = "http://localhost:8080/v1/chat/completions"
    )]
    api_url: String,

    /// API key sent as a bearer token
    #[clap(long, env = "SDKGEN_API_KEY", global = true)]
    api_key: Option<String>,

    /// Whether to display additional information.
    #[clap(long, env = "SDKGEN_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

impl Global {
    /// Resolve the workspace root to an existing directory, or `None` when
    /// no workspace is open.
    pub fn workspace_root(&self) -> Option<std::path::PathBuf> {
        self.workspace
            .clone()
            .or_else(|| std::env::current_dir().ok())
            .filter(|path| path.is_dir())
    }
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Generate an SDK utility file from a free-text request
    Generate(crate::generate::GenerateOptions),

    /// Interactive panel: read requests line by line from stdin
    Panel,

    /// Show the workspace context that would be sent to the model
    Scan(crate::scan::ScanOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Generate(options) => crate::generate::run(options, app.global).await,
        SubCommands::Panel => crate::panel::run(app.global).await,
        SubCommands::Scan(options) => crate::scan::run(options, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
