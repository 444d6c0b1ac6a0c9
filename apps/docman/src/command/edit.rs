//! 修改与新建文档

use super::Command;
use crate::error::Result;
use crate::workspace::Workspace;
use search_core::WriteMode;
use std::io::Write;

pub struct EditCommand {
    document: String,
    text: String,
    mode: WriteMode,
}

impl EditCommand {
    pub fn new(document: String, text: String, mode: WriteMode) -> Self {
        Self { document, text, mode }
    }
}

impl Command for EditCommand {
    fn execute(&self, workspace: &mut Workspace, out: &mut dyn Write) -> Result<()> {
        let identifier = workspace.resolve(&self.document)?;
        workspace.edit(&identifier, &self.text, self.mode)?;
        writeln!(out, "Document {} edited.", identifier)?;
        Ok(())
    }
}

pub struct AddCommand {
    name: String,
    text: String,
}

impl AddCommand {
    pub fn new(name: String, text: String) -> Self {
        Self { name, text }
    }
}

impl Command for AddCommand {
    fn execute(&self, workspace: &mut Workspace, out: &mut dyn Write) -> Result<()> {
        workspace.add(&self.name, &self.text)?;
        writeln!(out, "Document {} created.", self.name)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::testing::{run, workspace};

    #[test]
    fn test_edit_append_and_replace() {
        let mut ws = workspace();
        let output = run(
            &EditCommand::new("2".into(), "Slow turtles.".into(), WriteMode::Append),
            &mut ws,
        );
        assert_eq!(output, "Document document2.docx edited.\n");
        assert_eq!(ws.read_text("document2.docx"), "Quick thinking saves time.\nSlow turtles.");

        run(
            &EditCommand::new("document2.docx".into(), "Gone.".into(), WriteMode::Replace),
            &mut ws,
        );
        assert_eq!(ws.read_text("document2.docx"), "Gone.");
    }

    #[test]
    fn test_add() {
        let mut ws = workspace();
        let output = run(&AddCommand::new("extra.txt".into(), "Turtles".into()), &mut ws);
        assert_eq!(output, "Document extra.txt created.\n");
        assert!(ws.documents().contains(&"extra.txt".to_string()));
    }

    #[test]
    fn test_add_invalid_extension() {
        let mut out = Vec::new();
        let result = AddCommand::new("extra.pdf".into(), "x".into()).execute(&mut workspace(), &mut out);
        assert!(result.is_err());
    }
}
