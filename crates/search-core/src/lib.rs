// search-core/src/lib.rs
//! 文档索引与检索核心库
//!
//! 提供：
//! - 文本规范化（分词、小写、停用词过滤）
//! - 英文词干提取
//! - 按文档缓存的词元 / 词干存储
//! - 基于词干的布尔包含搜索
//! - `.docx` / 纯文本文档读写

pub mod config;
pub mod extract;
pub mod models;
pub mod normalizer;
pub mod search;
pub mod source;
pub mod stemmer;
pub mod store;
pub mod tokenizer;

// 重导出核心类型
pub use config::IndexConfig;
pub use extract::{DocumentKind, FileDocuments, SUPPORTED_EXTENSIONS, is_supported};
pub use models::Document;
pub use normalizer::{ENGLISH_STOP_WORDS, Normalizer, is_stop_word};
pub use search::{search_documents, stem_query};
pub use source::{DocumentSource, MemoryDocuments, SourceError, WriteMode};
pub use stemmer::Stemmer;
pub use store::{DocumentStore, ProcessMode, StoreError, StoreState};
pub use tokenizer::{AlphanumericFilter, TreebankTokenizer};

/// 搜索引擎统一入口
///
/// 持有文档存储，对外暴露 process_all / get / normalize / stem / search。
pub struct SearchEngine<S> {
    store: DocumentStore<S>,
}

impl<S: DocumentSource> SearchEngine<S> {
    pub fn new(store: DocumentStore<S>) -> Self {
        Self { store }
    }

    /// 以来源中现有的全部文档创建，使用给定配置的规范化器
    pub fn open(source: S, config: &IndexConfig) -> Result<Self, SourceError> {
        let store = DocumentStore::from_source(source)?
            .with_normalizer(Normalizer::with_config(config));
        Ok(Self::new(store))
    }

    pub fn store(&self) -> &DocumentStore<S> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut DocumentStore<S> {
        &mut self.store
    }

    pub fn source(&self) -> &S {
        self.store.source()
    }

    /// 显式处理全部文档
    pub fn process_all(&mut self) -> usize {
        self.store.process_all()
    }

    pub fn get(&self, identifier: &str) -> Result<&Document, StoreError> {
        self.store.get(identifier)
    }

    pub fn normalize(&self, raw_text: &str) -> Vec<String> {
        self.store.normalizer().normalize(raw_text)
    }

    pub fn stem(&self, token: &str) -> String {
        self.store.stemmer().stem(token)
    }

    pub fn stem_all<I, T>(&self, tokens: I) -> Vec<String>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.store.stemmer().stem_all(tokens)
    }

    /// 搜索包含该词的文档
    ///
    /// 若尚未处理，先静默处理全部文档（不输出显式处理时的日志）。
    pub fn search(&mut self, term: &str) -> Vec<String> {
        if !self.store.is_processed() {
            self.store.process_all_with(ProcessMode::Silent);
        }

        let results = search_documents(&self.store, term);
        tracing::info!("Searched for term '{}'", term);
        results
    }
}
