pub mod document;
pub mod edit;
pub mod menu;
pub mod process;
pub mod search;

use crate::error::Result;
use crate::workspace::Workspace;
use std::io::Write;

pub use document::{ReadCommand, StemCommand, TokenizeCommand};
pub use edit::{AddCommand, EditCommand};
pub use menu::MenuCommand;
pub use process::{InitCommand, ProcessCommand};
pub use search::SearchCommand;

pub trait Command {
    fn execute(&self, workspace: &mut Workspace, out: &mut dyn Write) -> Result<()>;
}

pub(crate) fn write_lines(out: &mut dyn Write, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::config::Config;
    use crate::workspace::Workspace;
    use search_core::MemoryDocuments;

    pub fn workspace() -> Workspace {
        let source = MemoryDocuments::with_documents([
            ("document1.docx", "The quick brown fox jumps over the lazy dog."),
            ("document2.docx", "Quick thinking saves time."),
        ]);
        Workspace::from_source(Box::new(source), &Config::default()).unwrap()
    }

    pub fn run(command: &dyn super::Command, workspace: &mut Workspace) -> String {
        let mut out = Vec::new();
        command.execute(workspace, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }
}
