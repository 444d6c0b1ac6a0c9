use super::{Command, write_lines};
use crate::error::Result;
use crate::render;
use crate::workspace::Workspace;
use std::io::Write;

pub struct SearchCommand {
    term: String,
    json: bool,
}

impl SearchCommand {
    pub fn new(term: String, json: bool) -> Self {
        Self { term, json }
    }
}

impl Command for SearchCommand {
    fn execute(&self, workspace: &mut Workspace, out: &mut dyn Write) -> Result<()> {
        let results = workspace.search(&self.term);
        if self.json {
            serde_json::to_writer(&mut *out, &results)?;
            writeln!(out)?;
            return Ok(());
        }
        write_lines(out, &render::search_results(&self.term, &results))
    }
}
