//! 文档集合的会话状态：搜索引擎 + 文档来源

use crate::config::Config;
use crate::error::{Result, WrapErr, error};
use crate::seed;
use search_core::{
    DocumentSource, DocumentStore, FileDocuments, Normalizer, SUPPORTED_EXTENSIONS, SearchEngine,
    WriteMode, is_supported,
};

/// 支持的扩展名，如 ".docx, .txt, .md"
pub fn extension_list() -> String {
    SUPPORTED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(", ")
}

pub struct Workspace {
    engine: SearchEngine<Box<dyn DocumentSource>>,
}

impl Workspace {
    /// 打开配置中的文档目录，按需创建示例文档
    ///
    /// 目录在第一次写入文档时才会创建。
    pub fn open(config: &Config) -> Result<Self> {
        tracing::debug!("文档目录: {:?}", config.documents_dir);

        let source = FileDocuments::new(&config.documents_dir);
        if config.seed_documents {
            let created = seed::create_documents(&source, false)?;
            if !created.is_empty() {
                tracing::info!("已创建示例文档: {}", created.join(", "));
            }
        }

        Self::from_source(Box::new(source), config)
    }

    pub fn from_source(source: Box<dyn DocumentSource>, config: &Config) -> Result<Self> {
        let identifiers = seed::collection_order(&source)?;
        let store = DocumentStore::new(source, identifiers)
            .with_normalizer(Normalizer::with_config(&config.index_config()));
        Ok(Self {
            engine: SearchEngine::new(store),
        })
    }

    pub fn engine(&self) -> &SearchEngine<Box<dyn DocumentSource>> {
        &self.engine
    }

    /// 当前集合中的文档，按集合顺序
    pub fn documents(&self) -> &[String] {
        self.engine.store().identifiers()
    }

    /// 将文件名或 1 起始的序号解析为文档标识
    pub fn resolve(&self, selector: &str) -> Result<String> {
        let documents = self.documents();
        if let Ok(number) = selector.parse::<usize>() {
            return match number.checked_sub(1).and_then(|idx| documents.get(idx)) {
                Some(identifier) => Ok(identifier.clone()),
                None => Err(error!(
                    "Invalid document number. Please enter a number between 1 and {}.",
                    documents.len()
                )),
            };
        }

        documents
            .iter()
            .find(|identifier| identifier.as_str() == selector)
            .cloned()
            .ok_or_else(|| error!("Unknown document: {}", selector))
    }

    /// 直接从来源读取当前内容，读取失败时记录警告并返回空文本
    pub fn read_text(&self, identifier: &str) -> String {
        match self.engine.store().load(identifier) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Error reading {}: {}", identifier, e);
                String::new()
            }
        }
    }

    /// 文档当前内容的规范化词元（不经过缓存）
    pub fn tokens(&self, identifier: &str) -> Vec<String> {
        self.engine.normalize(&self.read_text(identifier))
    }

    pub fn stems(&self, identifier: &str) -> Vec<String> {
        self.engine.stem_all(self.tokens(identifier))
    }

    pub fn search(&mut self, term: &str) -> Vec<String> {
        self.engine.search(term)
    }

    /// 修改文档；已缓存的处理结果保持不变，直到下一次处理
    pub fn edit(&self, identifier: &str, text: &str, mode: WriteMode) -> Result<()> {
        self.engine
            .source()
            .write(identifier, text, mode)
            .wrap_err_with(|| format!("Cannot edit {}", identifier))
    }

    /// 创建新文档并加入集合
    pub fn add(&mut self, name: &str, text: &str) -> Result<()> {
        if !is_supported(name) {
            return Err(error!(
                "Invalid extension. Please enter a filename with one of the extensions: {}",
                extension_list()
            ));
        }
        self.engine
            .source()
            .create(name, text)
            .wrap_err_with(|| format!("Cannot create {}", name))?;
        self.engine.store_mut().register(name);
        Ok(())
    }

    /// 显式处理全部文档
    pub fn process(&mut self) -> usize {
        self.engine.process_all()
    }

    /// 创建示例文档并登记新出现的文件
    pub fn seed(&mut self, force: bool) -> Result<Vec<String>> {
        let created = seed::create_documents(self.engine.source(), force)?;
        for name in &created {
            self.engine.store_mut().register(name.as_str());
        }
        Ok(created)
    }
}
