// search-core/src/extract.rs
//! 文本提取模块 - 基于目录的文档读写
//!
//! 文档标识即文件名。支持 `.docx`（docx-rs）以及 `.txt` / `.md` 纯文本。

use std::fs;
use std::path::{Path, PathBuf};

use chardetng::EncodingDetector;
use docx_rs::{Docx, DocumentChild, Paragraph, ParagraphChild, Run, RunChild, read_docx};

use crate::source::{DocumentSource, SourceError, WriteMode};

/// 支持的文件扩展名
pub const SUPPORTED_EXTENSIONS: &[&str] = &["docx", "txt", "md"];

/// 文档格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Docx,
    PlainText,
}

impl DocumentKind {
    pub fn from_identifier(identifier: &str) -> Result<Self, SourceError> {
        let extension = Path::new(identifier)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "docx" => Ok(Self::Docx),
            "txt" | "md" => Ok(Self::PlainText),
            _ => Err(SourceError::Unsupported {
                identifier: identifier.to_string(),
                extension,
            }),
        }
    }
}

/// 检查文件名是否为支持的文档格式
pub fn is_supported(identifier: &str) -> bool {
    DocumentKind::from_identifier(identifier).is_ok()
}

/// 目录中的文档集合
#[derive(Debug, Clone)]
pub struct FileDocuments {
    dir: PathBuf,
}

impl FileDocuments {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// 标识到文件路径，拒绝带目录成分的名字
    pub fn path_of(&self, identifier: &str) -> Result<PathBuf, SourceError> {
        let name = Path::new(identifier);
        if identifier.is_empty() || name.file_name().and_then(|n| n.to_str()) != Some(identifier) {
            return Err(SourceError::InvalidName(identifier.to_string()));
        }
        Ok(self.dir.join(name))
    }

    fn existing_path(&self, identifier: &str) -> Result<PathBuf, SourceError> {
        let path = self.path_of(identifier)?;
        if !path.is_file() {
            return Err(SourceError::NotFound(identifier.to_string()));
        }
        Ok(path)
    }

    fn ensure_dir(&self) -> Result<(), SourceError> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(|source| SourceError::Io {
                path: self.dir.clone(),
                source,
            })?;
        }
        Ok(())
    }
}

impl DocumentSource for FileDocuments {
    fn read(&self, identifier: &str) -> Result<String, SourceError> {
        let kind = DocumentKind::from_identifier(identifier)?;
        let path = self.existing_path(identifier)?;
        tracing::debug!("正在解析文件: {:?}", path);

        match kind {
            DocumentKind::Docx => Ok(read_docx_paragraphs(&path, identifier)?.join("\n")),
            DocumentKind::PlainText => read_text_with_encoding_detection(&path),
        }
    }

    fn write(&self, identifier: &str, text: &str, mode: WriteMode) -> Result<(), SourceError> {
        let kind = DocumentKind::from_identifier(identifier)?;
        let path = self.existing_path(identifier)?;

        match (kind, mode) {
            (DocumentKind::Docx, WriteMode::Append) => {
                // 在解析出的文档上追加，表格、格式等原有内容保持不变
                let docx = read_docx_file(&path, identifier)?;
                pack_docx(&path, docx.add_paragraph(text_paragraph(text)))?;
            }
            (DocumentKind::Docx, WriteMode::Replace) => {
                pack_docx(&path, Docx::new().add_paragraph(text_paragraph(text)))?;
            }
            (DocumentKind::PlainText, WriteMode::Append) => {
                let mut content = read_text_with_encoding_detection(&path)?;
                if !content.is_empty() && !content.ends_with('\n') {
                    content.push('\n');
                }
                content.push_str(text);
                write_text(&path, &content)?;
            }
            (DocumentKind::PlainText, WriteMode::Replace) => {
                write_text(&path, text)?;
            }
        }

        tracing::info!("Edited {} with mode '{:?}'", identifier, mode);
        Ok(())
    }

    fn create(&self, identifier: &str, text: &str) -> Result<(), SourceError> {
        let kind = DocumentKind::from_identifier(identifier)?;
        let path = self.path_of(identifier)?;
        self.ensure_dir()?;

        match kind {
            DocumentKind::Docx => pack_docx(&path, Docx::new().add_paragraph(text_paragraph(text)))?,
            DocumentKind::PlainText => write_text(&path, text)?,
        }

        tracing::info!("{} created", identifier);
        Ok(())
    }

    fn identifiers(&self) -> Result<Vec<String>, SourceError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.dir).map_err(|source| SourceError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let mut identifiers: Vec<String> = entries
            .flatten()
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
            .filter(|name| is_supported(name))
            .collect();
        identifiers.sort();
        Ok(identifiers)
    }

    fn exists(&self, identifier: &str) -> bool {
        self.existing_path(identifier).is_ok()
    }
}

/// 智能读取文本文件（自动检测编码）
fn read_text_with_encoding_detection(path: &Path) -> Result<String, SourceError> {
    let bytes = fs::read(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    // 先尝试UTF-8
    if let Ok(text) = std::str::from_utf8(&bytes) {
        return Ok(text.to_string());
    }

    let mut detector = EncodingDetector::new();
    detector.feed(&bytes, true);
    let detected_encoding = detector.guess(None, true);

    tracing::debug!("检测到文件编码 {:?}: {:?}", detected_encoding.name(), path);

    let (decoded, encoding_used, had_errors) = detected_encoding.decode(&bytes);
    if had_errors {
        tracing::warn!("文件 {:?} 使用 {} 解码时有部分错误", path, encoding_used.name());
    }

    Ok(decoded.into_owned())
}

fn write_text(path: &Path, text: &str) -> Result<(), SourceError> {
    fs::write(path, text).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_docx_file(path: &Path, identifier: &str) -> Result<Docx, SourceError> {
    let bytes = fs::read(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    read_docx(&bytes).map_err(|e| SourceError::Parse {
        identifier: identifier.to_string(),
        message: format!("{:?}", e),
    })
}

/// 读取 docx 的全部段落文本（包括空段落）
fn read_docx_paragraphs(path: &Path, identifier: &str) -> Result<Vec<String>, SourceError> {
    let docx = read_docx_file(path, identifier)?;
    let paragraphs = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
            _ => None,
        })
        .collect();
    Ok(paragraphs)
}

/// 段落 -> 文本：拼接所有 run 中的文字，制表符和换行按原样保留
fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                match run_child {
                    RunChild::Text(t) => text.push_str(&t.text),
                    RunChild::Tab(_) => text.push('\t'),
                    RunChild::Break(_) => text.push('\n'),
                    _ => {}
                }
            }
        }
    }
    text
}

fn text_paragraph(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text))
}

fn pack_docx(path: &Path, docx: Docx) -> Result<(), SourceError> {
    let file = fs::File::create(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    docx.build().pack(file).map_err(|e| SourceError::Parse {
        identifier: path.display().to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Table, TableCell, TableRow};
    use rstest::rstest;
    use tempfile::TempDir;

    fn documents() -> (TempDir, FileDocuments) {
        let dir = tempfile::tempdir().unwrap();
        let docs = FileDocuments::new(dir.path().join("docs"));
        (dir, docs)
    }

    #[rstest]
    #[case("report.docx", Some(DocumentKind::Docx))]
    #[case("REPORT.DOCX", Some(DocumentKind::Docx))]
    #[case("notes.txt", Some(DocumentKind::PlainText))]
    #[case("readme.md", Some(DocumentKind::PlainText))]
    #[case("image.png", None)]
    #[case("no_extension", None)]
    fn test_document_kind(#[case] name: &str, #[case] expected: Option<DocumentKind>) {
        assert_eq!(DocumentKind::from_identifier(name).ok(), expected);
    }

    #[test]
    fn test_supported_extensions_are_recognized() {
        for ext in SUPPORTED_EXTENSIONS {
            assert!(is_supported(&format!("file.{}", ext)), "{ext}");
        }
    }

    #[rstest]
    #[case("")]
    #[case("../escape.docx")]
    #[case("nested/file.txt")]
    fn test_path_of_rejects_invalid_names(#[case] name: &str) {
        let (_dir, docs) = documents();
        assert!(matches!(docs.path_of(name), Err(SourceError::InvalidName(_))));
    }

    #[test]
    fn test_docx_create_and_read() {
        let (_dir, docs) = documents();
        docs.create("document1.docx", "The quick brown fox jumps.").unwrap();
        assert_eq!(docs.read("document1.docx").unwrap(), "The quick brown fox jumps.");
    }

    #[test]
    fn test_docx_append_and_replace() {
        let (_dir, docs) = documents();
        docs.create("a.docx", "first line").unwrap();

        docs.write("a.docx", "second line", WriteMode::Append).unwrap();
        assert_eq!(docs.read("a.docx").unwrap(), "first line\nsecond line");

        docs.write("a.docx", "fresh", WriteMode::Replace).unwrap();
        assert_eq!(docs.read("a.docx").unwrap(), "fresh");
    }

    #[test]
    fn test_docx_append_keeps_tables() {
        let (_dir, docs) = documents();
        docs.create("report.docx", "").unwrap();
        let path = docs.path_of("report.docx").unwrap();

        let table = Table::new(vec![TableRow::new(vec![
            TableCell::new().add_paragraph(text_paragraph("cell")),
        ])]);
        pack_docx(&path, Docx::new().add_paragraph(text_paragraph("intro")).add_table(table)).unwrap();

        docs.write("report.docx", "tail", WriteMode::Append).unwrap();

        let children = read_docx_file(&path, "report.docx").unwrap().document.children;
        assert_eq!(children.len(), 3);
        assert!(matches!(children[0], DocumentChild::Paragraph(_)));
        assert!(matches!(children[1], DocumentChild::Table(_)));
        assert!(matches!(children[2], DocumentChild::Paragraph(_)));
        assert_eq!(docs.read("report.docx").unwrap(), "intro\ntail");
    }

    #[test]
    fn test_text_append_and_replace() {
        let (_dir, docs) = documents();
        docs.create("notes.txt", "alpha").unwrap();

        docs.write("notes.txt", "beta", WriteMode::Append).unwrap();
        assert_eq!(docs.read("notes.txt").unwrap(), "alpha\nbeta");

        docs.write("notes.txt", "gamma", WriteMode::Replace).unwrap();
        assert_eq!(docs.read("notes.txt").unwrap(), "gamma");
    }

    #[test]
    fn test_read_gbk_text() {
        let (_dir, docs) = documents();
        docs.create("gbk.txt", "").unwrap();
        let (encoded, _, _) = encoding_rs::GBK.encode("中文文档内容，用于测试编码检测。");
        fs::write(docs.path_of("gbk.txt").unwrap(), &encoded).unwrap();

        let text = docs.read("gbk.txt").unwrap();
        assert!(!text.is_empty());
    }

    #[test]
    fn test_missing_and_unsupported() {
        let (_dir, docs) = documents();
        assert!(matches!(docs.read("nothing.docx"), Err(SourceError::NotFound(_))));
        assert!(matches!(docs.read("image.png"), Err(SourceError::Unsupported { .. })));
        assert!(matches!(
            docs.write("nothing.txt", "x", WriteMode::Append),
            Err(SourceError::NotFound(_))
        ));
        assert!(!docs.exists("nothing.docx"));
    }

    #[test]
    fn test_corrupt_docx_is_parse_error() {
        let (_dir, docs) = documents();
        docs.create("broken.txt", "").unwrap();
        fs::write(docs.dir().join("broken.docx"), b"not a zip archive").unwrap();
        assert!(matches!(docs.read("broken.docx"), Err(SourceError::Parse { .. })));
    }

    #[test]
    fn test_identifiers_lists_supported_files_sorted() {
        let (_dir, docs) = documents();
        assert!(docs.identifiers().unwrap().is_empty());

        docs.create("b.docx", "b").unwrap();
        docs.create("a.txt", "a").unwrap();
        fs::write(docs.dir().join("c.png"), b"png").unwrap();
        fs::create_dir(docs.dir().join("sub.docx")).unwrap();

        assert_eq!(docs.identifiers().unwrap(), vec!["a.txt", "b.docx"]);
    }
}
