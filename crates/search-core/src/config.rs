// search-core/src/config.rs
//! 配置模块

use serde::{Deserialize, Serialize};

/// 索引管线配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct IndexConfig {
    /// 追加到内置英文停用词表之后的停用词（按小写匹配）
    pub extra_stop_words: Vec<String>,
}

impl IndexConfig {
    pub fn with_extra_stop_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extra_stop_words: words.into_iter().map(Into::into).collect(),
        }
    }
}
