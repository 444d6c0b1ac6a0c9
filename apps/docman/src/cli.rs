use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use search_core::WriteMode;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase verbosity. Can be used multiple times (e.g., -v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to the configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the documents directory
    #[arg(long, global = true)]
    pub documents_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive menu (default)
    Menu,
    /// Create the sample documents
    Init {
        /// Overwrite sample documents that already exist
        #[arg(long)]
        force: bool,
    },
    /// Print a document
    Read {
        /// Document name or 1-based number
        document: String,
    },
    /// Print the normalized tokens of a document
    Tokenize {
        /// Document name or 1-based number
        document: String,
    },
    /// Print the stemmed tokens of a document
    Stem {
        /// Document name or 1-based number
        document: String,
    },
    /// List the documents containing a term
    Search {
        term: String,
        /// Print the result as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Append to or replace the text of a document
    Edit {
        /// Document name or 1-based number
        document: String,
        text: String,
        #[arg(long, value_enum, default_value_t = ModeArg::Append)]
        mode: ModeArg,
    },
    /// Create a new document
    Add {
        /// File name with a supported extension (.docx, .txt, .md)
        name: String,
        text: String,
    },
    /// Process every document and report token counts
    Process,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeArg {
    Append,
    Replace,
}

impl From<ModeArg> for WriteMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Append => WriteMode::Append,
            ModeArg::Replace => WriteMode::Replace,
        }
    }
}
