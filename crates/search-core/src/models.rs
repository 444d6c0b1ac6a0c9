// search-core/src/models.rs
//! 数据模型定义

use serde::{Deserialize, Serialize};

/// 已处理的文档
///
/// `tokens` 与 `stemmed_tokens` 总是由同一份 `raw_text` 经同一条管线得到，
/// 不单独修改。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub identifier: String,
    pub raw_text: String,
    pub tokens: Vec<String>,
    pub stemmed_tokens: Vec<String>,
    /// 读取失败时的错误描述，此时 `raw_text` 为空
    pub load_error: Option<String>,
}

impl Document {
    /// 读取是否失败（区分“空文档”与“读取失败”）
    pub fn is_load_failure(&self) -> bool {
        self.load_error.is_some()
    }

    /// 词干序列中是否包含给定词干
    pub fn contains_stem(&self, stem: &str) -> bool {
        self.stemmed_tokens.iter().any(|token| token == stem)
    }
}
