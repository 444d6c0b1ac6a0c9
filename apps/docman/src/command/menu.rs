// apps/docman/src/command/menu.rs
//! 交互式菜单
//!
//! 菜单项由静态分发表 [`MENU`] 描述，每一项对应一个处理函数。
//! 输入结束（EOF）等同于返回上一级，在主菜单中则退出。

use super::{Command, write_lines};
use crate::error::Result;
use crate::render;
use crate::workspace::{Workspace, extension_list};
use search_core::WriteMode;
use std::io::{BufRead, Write};

/// 处理函数执行后的去向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

type Handler = fn(&mut Console<'_>, &mut Workspace) -> Result<Flow>;

pub struct MenuEntry {
    pub key: char,
    pub label: &'static str,
    handler: Handler,
}

pub static MENU: [MenuEntry; 8] = [
    MenuEntry { key: 'A', label: "Read a document", handler: read_document },
    MenuEntry { key: 'B', label: "Tokenize text from a document", handler: tokenize_document },
    MenuEntry { key: 'C', label: "Stem words from a document", handler: stem_document },
    MenuEntry { key: 'D', label: "Search for a term in documents", handler: search_term },
    MenuEntry { key: 'E', label: "Edit a document", handler: edit_document },
    MenuEntry { key: 'F', label: "Add a new document", handler: add_document },
    MenuEntry { key: 'P', label: "Process all documents", handler: process_documents },
    MenuEntry { key: 'G', label: "Exit", handler: confirm_exit },
];

/// 菜单的输入输出
pub struct Console<'a> {
    input: &'a mut dyn BufRead,
    out: &'a mut dyn Write,
}

impl<'a> Console<'a> {
    pub fn new(input: &'a mut dyn BufRead, out: &'a mut dyn Write) -> Self {
        Self { input, out }
    }

    /// 输出提示并读取一行，EOF 时返回 None
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn print(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    fn print_lines(&mut self, lines: &[String]) -> Result<()> {
        write_lines(&mut *self.out, lines)
    }
}

pub struct MenuCommand;

impl Command for MenuCommand {
    fn execute(&self, workspace: &mut Workspace, out: &mut dyn Write) -> Result<()> {
        let stdin = std::io::stdin();
        let mut input = stdin.lock();
        run(&mut Console::new(&mut input, out), workspace)
    }
}

/// 主循环，直到确认退出或输入结束
pub fn run(console: &mut Console<'_>, workspace: &mut Workspace) -> Result<()> {
    let entries: Vec<(char, &str)> = MENU.iter().map(|entry| (entry.key, entry.label)).collect();
    let keys: Vec<String> = MENU.iter().map(|entry| entry.key.to_string()).collect();
    let option_prompt = format!("     Select an option ({}): ", keys.join("/"));
    let invalid_hint = match keys.split_last() {
        Some((last, rest)) => format!("Invalid choice, please enter {}, or {}.", rest.join(", "), last),
        None => String::from("Invalid choice."),
    };

    loop {
        console.print_lines(&render::menu(&entries))?;
        let Some(choice) = console.prompt(&option_prompt)? else {
            return Ok(());
        };

        let choice = choice.trim().to_uppercase();
        let entry = MENU
            .iter()
            .find(|entry| choice.len() == 1 && choice.starts_with(entry.key));
        match entry {
            Some(entry) => {
                tracing::debug!("菜单选项: {}", entry.key);
                if (entry.handler)(console, workspace)? == Flow::Exit {
                    return Ok(());
                }
            }
            None => console.print(&invalid_hint)?,
        }
    }
}

/// 反复列出文档并读取序号，对每个有效选择调用 `action`，输入 Z 返回
fn for_each_selected<F>(console: &mut Console<'_>, workspace: &mut Workspace, verb: &str, mut action: F) -> Result<Flow>
where
    F: FnMut(&mut Console<'_>, &mut Workspace, String) -> Result<()>,
{
    loop {
        let documents = workspace.documents().to_vec();
        console.print_lines(&render::document_list(verb, &documents))?;

        let prompt = format!(
            "Enter the document number to {} (1-{}) or 'Z' to go back: ",
            verb.to_lowercase(),
            documents.len()
        );
        let Some(choice) = console.prompt(&prompt)? else {
            return Ok(Flow::Continue);
        };
        if choice.trim().eq_ignore_ascii_case("z") {
            return Ok(Flow::Continue);
        }

        let selected = choice
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|number| number.checked_sub(1))
            .and_then(|idx| documents.get(idx));
        match selected {
            Some(identifier) => action(console, workspace, identifier.clone())?,
            None => console.print(&format!(
                "Invalid document number. Please enter a number between 1 and {}.",
                documents.len()
            ))?,
        }
    }
}

fn read_document(console: &mut Console<'_>, workspace: &mut Workspace) -> Result<Flow> {
    for_each_selected(console, workspace, "Read", |console, workspace, identifier| {
        let text = workspace.read_text(&identifier);
        console.print_lines(&render::document_content(&identifier, &text))
    })
}

fn tokenize_document(console: &mut Console<'_>, workspace: &mut Workspace) -> Result<Flow> {
    for_each_selected(console, workspace, "tokenize", |console, workspace, identifier| {
        let tokens = workspace.tokens(&identifier);
        console.print_lines(&render::token_table(&identifier, &tokens))
    })
}

fn stem_document(console: &mut Console<'_>, workspace: &mut Workspace) -> Result<Flow> {
    for_each_selected(console, workspace, "stem", |console, workspace, identifier| {
        let stems = workspace.stems(&identifier);
        console.print_lines(&render::stem_table(&identifier, &stems))
    })
}

fn search_term(console: &mut Console<'_>, workspace: &mut Workspace) -> Result<Flow> {
    loop {
        let Some(term) = console.prompt("Enter a term to search or 'Z' to go back : ")? else {
            return Ok(Flow::Continue);
        };
        if term.trim().eq_ignore_ascii_case("z") {
            return Ok(Flow::Continue);
        }
        let results = workspace.search(&term);
        console.print_lines(&render::search_results(&term, &results))?;
    }
}

fn edit_document(console: &mut Console<'_>, workspace: &mut Workspace) -> Result<Flow> {
    for_each_selected(console, workspace, "edit", |console, workspace, identifier| {
        let Some(text) = console.prompt("Enter the new text to add: ")? else {
            return Ok(());
        };
        let Some(mode) = console.prompt("Enter 'H' to append or 'J' to replace the text: ")? else {
            return Ok(());
        };

        let mode = match mode.trim().to_uppercase().as_str() {
            "H" => WriteMode::Append,
            "J" => WriteMode::Replace,
            _ => return console.print("Invalid mode. Please enter 'H' to append or 'J' to replace."),
        };
        workspace.edit(&identifier, &text, mode)?;
        console.print(&format!("Document {} edited.", identifier))
    })
}

fn add_document(console: &mut Console<'_>, workspace: &mut Workspace) -> Result<Flow> {
    let extensions = extension_list();
    let name = loop {
        let prompt = format!("Enter the new document filename ({}): ", extensions);
        let Some(name) = console.prompt(&prompt)? else {
            return Ok(Flow::Continue);
        };
        let name = name.trim().to_string();
        if search_core::is_supported(&name) {
            break name;
        }
        console.print(&format!(
            "Invalid extension. Please enter a filename with one of the extensions: {}",
            extensions
        ))?;
    };

    let Some(text) = console.prompt("Enter the text for the new document: ")? else {
        return Ok(Flow::Continue);
    };
    workspace.add(&name, &text)?;
    console.print(&format!("Document {} created.", name))?;
    Ok(Flow::Continue)
}

fn process_documents(console: &mut Console<'_>, workspace: &mut Workspace) -> Result<Flow> {
    let count = workspace.process();
    console.print(&format!("Processed {} documents.", count))?;
    Ok(Flow::Continue)
}

fn confirm_exit(console: &mut Console<'_>, _workspace: &mut Workspace) -> Result<Flow> {
    let Some(answer) = console.prompt("are you sure to exit (write yes to exit)  ")? else {
        return Ok(Flow::Exit);
    };
    if answer.trim().eq_ignore_ascii_case("yes") {
        console.print("Exiting the program. Goodbye!")?;
        Ok(Flow::Exit)
    } else {
        console.print("Program continues...")?;
        Ok(Flow::Continue)
    }
}
