// search-core/src/source.rs
//! 文档来源抽象
//!
//! 索引核心只通过 [`DocumentSource::read`] 获取原始文本，写入接口留给外层
//! （菜单、命令行）使用。写入不会自动刷新已缓存的索引。

use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 写入模式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// 在末尾追加一个新段落
    #[default]
    Append,
    /// 清空原内容后写入
    Replace,
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("document not found: {0}")]
    NotFound(String),

    #[error("unsupported document format '{extension}': {identifier}")]
    Unsupported { identifier: String, extension: String },

    #[error("invalid document name: {0}")]
    InvalidName(String),

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {identifier}: {message}")]
    Parse { identifier: String, message: String },
}

/// 文档读写接口
pub trait DocumentSource {
    /// 读取文档的纯文本内容
    fn read(&self, identifier: &str) -> Result<String, SourceError>;

    /// 修改已有文档
    fn write(&self, identifier: &str, text: &str, mode: WriteMode) -> Result<(), SourceError>;

    /// 创建文档（已存在则覆盖）
    fn create(&self, identifier: &str, text: &str) -> Result<(), SourceError>;

    /// 来源中现有的全部文档标识
    fn identifiers(&self) -> Result<Vec<String>, SourceError>;

    fn exists(&self, identifier: &str) -> bool {
        self.read(identifier).is_ok()
    }
}

impl<S: DocumentSource + ?Sized> DocumentSource for &S {
    fn read(&self, identifier: &str) -> Result<String, SourceError> {
        (**self).read(identifier)
    }

    fn write(&self, identifier: &str, text: &str, mode: WriteMode) -> Result<(), SourceError> {
        (**self).write(identifier, text, mode)
    }

    fn create(&self, identifier: &str, text: &str) -> Result<(), SourceError> {
        (**self).create(identifier, text)
    }

    fn identifiers(&self) -> Result<Vec<String>, SourceError> {
        (**self).identifiers()
    }

    fn exists(&self, identifier: &str) -> bool {
        (**self).exists(identifier)
    }
}

impl<S: DocumentSource + ?Sized> DocumentSource for Box<S> {
    fn read(&self, identifier: &str) -> Result<String, SourceError> {
        (**self).read(identifier)
    }

    fn write(&self, identifier: &str, text: &str, mode: WriteMode) -> Result<(), SourceError> {
        (**self).write(identifier, text, mode)
    }

    fn create(&self, identifier: &str, text: &str) -> Result<(), SourceError> {
        (**self).create(identifier, text)
    }

    fn identifiers(&self) -> Result<Vec<String>, SourceError> {
        (**self).identifiers()
    }

    fn exists(&self, identifier: &str) -> bool {
        (**self).exists(identifier)
    }
}

/// 内存中的文档来源，按插入顺序保存
#[derive(Debug, Default)]
pub struct MemoryDocuments {
    documents: RwLock<Vec<(String, String)>>,
}

impl MemoryDocuments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_documents<I, K, V>(documents: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let documents = documents
            .into_iter()
            .map(|(identifier, text)| (identifier.into(), text.into()))
            .collect();
        Self {
            documents: RwLock::new(documents),
        }
    }
}

impl DocumentSource for MemoryDocuments {
    fn read(&self, identifier: &str) -> Result<String, SourceError> {
        let documents = self.documents.read().unwrap_or_else(PoisonError::into_inner);
        documents
            .iter()
            .find(|(id, _)| id == identifier)
            .map(|(_, text)| text.clone())
            .ok_or_else(|| SourceError::NotFound(identifier.to_string()))
    }

    fn write(&self, identifier: &str, text: &str, mode: WriteMode) -> Result<(), SourceError> {
        let mut documents = self.documents.write().unwrap_or_else(PoisonError::into_inner);
        let (_, content) = documents
            .iter_mut()
            .find(|(id, _)| id == identifier)
            .ok_or_else(|| SourceError::NotFound(identifier.to_string()))?;

        match mode {
            WriteMode::Replace => *content = text.to_string(),
            WriteMode::Append if content.is_empty() => content.push_str(text),
            WriteMode::Append => {
                content.push('\n');
                content.push_str(text);
            }
        }
        Ok(())
    }

    fn create(&self, identifier: &str, text: &str) -> Result<(), SourceError> {
        let mut documents = self.documents.write().unwrap_or_else(PoisonError::into_inner);
        match documents.iter_mut().find(|(id, _)| id == identifier) {
            Some((_, content)) => *content = text.to_string(),
            None => documents.push((identifier.to_string(), text.to_string())),
        }
        Ok(())
    }

    fn identifiers(&self) -> Result<Vec<String>, SourceError> {
        let documents = self.documents.read().unwrap_or_else(PoisonError::into_inner);
        Ok(documents.iter().map(|(id, _)| id.clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> MemoryDocuments {
        MemoryDocuments::with_documents([("a", "first"), ("b", "")])
    }

    #[test]
    fn test_read_missing() {
        let err = source().read("zzz").unwrap_err();
        assert!(matches!(err, SourceError::NotFound(ref id) if id == "zzz"));
    }

    #[test]
    fn test_append_adds_line() {
        let docs = source();
        docs.write("a", "second", WriteMode::Append).unwrap();
        docs.write("b", "only", WriteMode::Append).unwrap();
        assert_eq!(docs.read("a").unwrap(), "first\nsecond");
        assert_eq!(docs.read("b").unwrap(), "only");
    }

    #[test]
    fn test_replace_clears_content() {
        let docs = source();
        docs.write("a", "new", WriteMode::Replace).unwrap();
        assert_eq!(docs.read("a").unwrap(), "new");
    }

    #[test]
    fn test_write_unknown_document() {
        assert!(source().write("zzz", "x", WriteMode::Append).is_err());
    }

    #[test]
    fn test_create_keeps_insertion_order() {
        let docs = source();
        docs.create("c", "third").unwrap();
        docs.create("a", "again").unwrap();
        assert_eq!(docs.identifiers().unwrap(), vec!["a", "b", "c"]);
        assert_eq!(docs.read("a").unwrap(), "again");
        assert!(docs.exists("c"));
    }
}
