use super::Command;
use crate::error::Result;
use crate::workspace::Workspace;
use std::io::Write;

/// 显式处理全部文档并输出每个文档的词元数
pub struct ProcessCommand;

impl Command for ProcessCommand {
    fn execute(&self, workspace: &mut Workspace, out: &mut dyn Write) -> Result<()> {
        let count = workspace.process();
        for document in workspace.engine().store().documents() {
            match &document.load_error {
                Some(e) => writeln!(out, "{}: failed ({})", document.identifier, e)?,
                None => writeln!(
                    out,
                    "{}: {} tokens",
                    document.identifier,
                    document.stemmed_tokens.len()
                )?,
            }
        }
        writeln!(out, "Processed {} documents.", count)?;
        Ok(())
    }
}

/// 创建示例文档
pub struct InitCommand {
    force: bool,
}

impl InitCommand {
    pub fn new(force: bool) -> Self {
        Self { force }
    }
}

impl Command for InitCommand {
    fn execute(&self, workspace: &mut Workspace, out: &mut dyn Write) -> Result<()> {
        let created = workspace.seed(self.force)?;
        if created.is_empty() {
            writeln!(out, "All sample documents already exist.")?;
        } else {
            for name in &created {
                writeln!(out, "Created {}", name)?;
            }
        }
        Ok(())
    }
}
