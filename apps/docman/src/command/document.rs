//! 查看文档：原文、词元、词干

use super::{Command, write_lines};
use crate::error::Result;
use crate::render;
use crate::workspace::Workspace;
use std::io::Write;

pub struct ReadCommand {
    document: String,
}

impl ReadCommand {
    pub fn new(document: String) -> Self {
        Self { document }
    }
}

impl Command for ReadCommand {
    fn execute(&self, workspace: &mut Workspace, out: &mut dyn Write) -> Result<()> {
        let identifier = workspace.resolve(&self.document)?;
        let text = workspace.read_text(&identifier);
        write_lines(out, &render::document_content(&identifier, &text))
    }
}

pub struct TokenizeCommand {
    document: String,
}

impl TokenizeCommand {
    pub fn new(document: String) -> Self {
        Self { document }
    }
}

impl Command for TokenizeCommand {
    fn execute(&self, workspace: &mut Workspace, out: &mut dyn Write) -> Result<()> {
        let identifier = workspace.resolve(&self.document)?;
        let tokens = workspace.tokens(&identifier);
        write_lines(out, &render::token_table(&identifier, &tokens))
    }
}

pub struct StemCommand {
    document: String,
}

impl StemCommand {
    pub fn new(document: String) -> Self {
        Self { document }
    }
}

impl Command for StemCommand {
    fn execute(&self, workspace: &mut Workspace, out: &mut dyn Write) -> Result<()> {
        let identifier = workspace.resolve(&self.document)?;
        let stems = workspace.stems(&identifier);
        write_lines(out, &render::stem_table(&identifier, &stems))
    }
}
