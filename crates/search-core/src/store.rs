// search-core/src/store.rs
//! 文档存储 - 标识到已处理文档的映射
//!
//! 处理结果在 Store 生命周期内缓存，不会因底层文档被修改而自动失效；
//! 只有再次调用 [`DocumentStore::process`] / [`DocumentStore::process_all`] 才会刷新。

use std::collections::HashMap;

use thiserror::Error;

use crate::models::Document;
use crate::normalizer::Normalizer;
use crate::source::{DocumentSource, SourceError};
use crate::stemmer::Stemmer;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("unknown document identifier: {0}")]
    UnknownIdentifier(String),

    #[error("document has not been processed yet: {0}")]
    NotProcessed(String),
}

/// 存储状态：EMPTY -> PROCESSING -> PROCESSED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    Empty,
    Processing,
    Processed,
}

/// 处理模式
///
/// 搜索触发的隐式处理为 `Silent`，不输出进度和完成日志；读取失败的警告照常输出。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessMode {
    Explicit,
    Silent,
}

/// 文档存储
pub struct DocumentStore<S> {
    source: S,
    normalizer: Normalizer,
    stemmer: Stemmer,
    identifiers: Vec<String>,
    documents: HashMap<String, Document>,
    state: StoreState,
}

impl<S: DocumentSource> DocumentStore<S> {
    /// 使用给定的标识集合创建，重复的标识只保留第一次出现
    pub fn new<I, T>(source: S, identifiers: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut store = Self {
            source,
            normalizer: Normalizer::new(),
            stemmer: Stemmer::new(),
            identifiers: Vec::new(),
            documents: HashMap::new(),
            state: StoreState::Empty,
        };
        for identifier in identifiers {
            store.register(identifier);
        }
        store
    }

    /// 以来源中现有的全部文档创建
    pub fn from_source(source: S) -> Result<Self, SourceError> {
        let identifiers = source.identifiers()?;
        Ok(Self::new(source, identifiers))
    }

    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// 登记新的文档标识，已存在时返回 false
    ///
    /// 新文档要等下一次处理后才能被搜索到。
    pub fn register(&mut self, identifier: impl Into<String>) -> bool {
        let identifier = identifier.into();
        if self.identifiers.contains(&identifier) {
            return false;
        }
        tracing::debug!("登记文档: {}", identifier);
        self.identifiers.push(identifier);
        true
    }

    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.identifiers.iter().any(|id| id == identifier)
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn stemmer(&self) -> &Stemmer {
        &self.stemmer
    }

    pub fn state(&self) -> StoreState {
        self.state
    }

    pub fn is_processed(&self) -> bool {
        self.state == StoreState::Processed
    }

    /// 从来源读取原始文本
    pub fn load(&self, identifier: &str) -> Result<String, SourceError> {
        self.source.read(identifier)
    }

    /// 处理单个文档并覆盖之前的结果
    pub fn process(&mut self, identifier: &str) -> Result<&Document, StoreError> {
        self.process_with(identifier, ProcessMode::Explicit)
    }

    /// 处理全部文档（显式调用，输出日志）
    pub fn process_all(&mut self) -> usize {
        self.process_all_with(ProcessMode::Explicit)
    }

    /// 按登记顺序处理全部文档，完成后进入 PROCESSED 状态
    ///
    /// 可重复调用，每次都完整重算。返回处理的文档数。
    pub fn process_all_with(&mut self, mode: ProcessMode) -> usize {
        self.state = StoreState::Processing;

        let identifiers = self.identifiers.clone();
        for identifier in &identifiers {
            let document = self.build_document(identifier, mode);
            self.documents.insert(identifier.clone(), document);
        }

        self.state = StoreState::Processed;
        if mode == ProcessMode::Explicit {
            tracing::info!("Processed all documents");
        }
        identifiers.len()
    }

    /// 获取已处理的文档
    pub fn get(&self, identifier: &str) -> Result<&Document, StoreError> {
        if !self.contains(identifier) {
            return Err(StoreError::UnknownIdentifier(identifier.to_string()));
        }
        self.documents
            .get(identifier)
            .ok_or_else(|| StoreError::NotProcessed(identifier.to_string()))
    }

    /// 按登记顺序遍历已处理的文档
    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.identifiers
            .iter()
            .filter_map(|identifier| self.documents.get(identifier))
    }

    fn process_with(&mut self, identifier: &str, mode: ProcessMode) -> Result<&Document, StoreError> {
        if !self.contains(identifier) {
            return Err(StoreError::UnknownIdentifier(identifier.to_string()));
        }

        let document = self.build_document(identifier, mode);
        let slot = self
            .documents
            .entry(identifier.to_string())
            .insert_entry(document);
        Ok(slot.into_mut())
    }

    /// raw_text -> normalize -> stem_all
    fn build_document(&self, identifier: &str, mode: ProcessMode) -> Document {
        let (raw_text, load_error) = match self.load(identifier) {
            Ok(text) => (text, None),
            Err(e) => {
                tracing::warn!("Error reading {}: {}", identifier, e);
                (String::new(), Some(e.to_string()))
            }
        };

        let tokens = self.normalizer.normalize(&raw_text);
        let stemmed_tokens = self.stemmer.stem_all(&tokens);

        if mode == ProcessMode::Explicit {
            tracing::debug!("已处理: {} ({} 个词元)", identifier, tokens.len());
        }

        Document {
            identifier: identifier.to_string(),
            raw_text,
            tokens,
            stemmed_tokens,
            load_error,
        }
    }
}
