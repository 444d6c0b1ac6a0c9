//! 示例文档集合

use search_core::{DocumentSource, SourceError};

pub const SEED_DOCUMENTS: [(&str, &str); 5] = [
    (
        "document1.docx",
        "Welcome to the first document! This document serves as a foundational piece for our exploration, containing a variety of rich content designed for thorough testing and experimentation. You’ll find unique insights and valuable information throughout.",
    ),
    (
        "document2.docx",
        "In this second document, we delve deeper into intriguing concepts and ideas. This document is not just another piece of text; it presents a captivating narrative that weaves together different themes, making it essential reading for anyone interested in the subject.",
    ),
    (
        "document3.docx",
        "The third document stands out with its vibrant descriptions and thought-provoking content. It invites readers to immerse themselves in its pages, where a wealth of knowledge and engaging discussions await. Expect to find enlightening perspectives that challenge conventional thinking.",
    ),
    (
        "document4.docx",
        "As we move to the fourth document, you will discover an abundance of sample texts that have been meticulously crafted to provide clarity and understanding. This document is filled with essential information, making it a vital resource for both novices and experts alike.",
    ),
    (
        "document5.docx",
        "Finally, the fifth document rounds out our collection with a wealth of information that invites exploration. Packed with useful insights and valuable text, it is designed to be an engaging read, encouraging you to ponder the ideas presented and apply them in your own endeavors.",
    ),
];

/// 创建示例文档，`force` 为 false 时跳过已存在的文件。返回新写入的文件名
pub fn create_documents<S: DocumentSource>(source: &S, force: bool) -> Result<Vec<String>, SourceError> {
    let mut created = Vec::new();
    for (name, text) in SEED_DOCUMENTS {
        if !force && source.exists(name) {
            continue;
        }
        source.create(name, text)?;
        created.push(name.to_string());
    }
    Ok(created)
}

/// 文档集合顺序：示例文档按固定顺序在前，其余按文件名排序
pub fn collection_order<S: DocumentSource>(source: &S) -> Result<Vec<String>, SourceError> {
    let mut existing = source.identifiers()?;
    let mut ordered: Vec<String> = SEED_DOCUMENTS
        .iter()
        .map(|(name, _)| name.to_string())
        .filter(|name| existing.contains(name))
        .collect();

    existing.retain(|name| !ordered.contains(name));
    existing.sort();
    ordered.extend(existing);
    Ok(ordered)
}
