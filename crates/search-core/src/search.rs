// search-core/src/search.rs
//! 搜索模块
//!
//! 布尔包含匹配：查询词只做小写和词干提取（不分词、不过滤停用词），
//! 结果按存储的登记顺序返回，不排序不打分。

use crate::source::DocumentSource;
use crate::stemmer::Stemmer;
use crate::store::DocumentStore;

/// 查询词 -> 词干
///
/// 多词输入作为一个整体提取词干，因此几乎不会命中任何文档。
pub fn stem_query(stemmer: &Stemmer, term: &str) -> String {
    stemmer.stem(&term.to_lowercase())
}

/// 在已处理的文档中查找包含该词干的文档标识
///
/// 只读扫描；调用方负责保证存储已处理。
pub fn search_documents<S: DocumentSource>(store: &DocumentStore<S>, term: &str) -> Vec<String> {
    let stemmed_term = stem_query(store.stemmer(), term);
    tracing::debug!("[搜索] 查询: '{}' -> 词干: '{}'", term, stemmed_term);

    if stemmed_term.is_empty() {
        return Vec::new();
    }

    store
        .documents()
        .filter(|document| document.contains_stem(&stemmed_term))
        .map(|document| document.identifier.clone())
        .collect()
}
