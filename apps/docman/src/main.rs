mod cli;
mod command;
mod config;
mod error;
mod render;
mod seed;
mod workspace;

use error::WrapErr;

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> error::Result<()> {
    color_eyre::install()?;
    let command_line = cli::Cli::parse();
    init_tracing(command_line.verbose);

    let mut cfg = config::Config::load(command_line.config.as_deref()).context("Load configuration error")?;
    if let Some(dir) = command_line.documents_dir {
        cfg.documents_dir = dir;
    }

    let mut workspace = workspace::Workspace::open(&cfg).context("Open documents directory error")?;

    let cmd: Box<dyn command::Command> = match command_line.command.unwrap_or(cli::Commands::Menu) {
        cli::Commands::Menu => Box::new(command::MenuCommand),
        cli::Commands::Init { force } => Box::new(command::InitCommand::new(force)),
        cli::Commands::Read { document } => Box::new(command::ReadCommand::new(document)),
        cli::Commands::Tokenize { document } => Box::new(command::TokenizeCommand::new(document)),
        cli::Commands::Stem { document } => Box::new(command::StemCommand::new(document)),
        cli::Commands::Search { term, json } => Box::new(command::SearchCommand::new(term, json)),
        cli::Commands::Edit { document, text, mode } => {
            Box::new(command::EditCommand::new(document, text, mode.into()))
        }
        cli::Commands::Add { name, text } => Box::new(command::AddCommand::new(name, text)),
        cli::Commands::Process => Box::new(command::ProcessCommand),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cmd.execute(&mut workspace, &mut out)?;

    Ok(())
}
