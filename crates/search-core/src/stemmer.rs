// search-core/src/stemmer.rs
//! 词干提取模块
//!
//! 使用 tantivy 内置的英文 Snowball (Porter2) 词干器。文档词元和查询词
//! 走同一条管线，保证同一个词无论大小写都得到相同的词根。

use tantivy::tokenizer::{
    Language, LowerCaser, RawTokenizer, Stemmer as SnowballStemmer, TextAnalyzer, TokenStream,
};

/// 英文词干提取器
#[derive(Clone)]
pub struct Stemmer {
    analyzer: TextAnalyzer,
}

impl Stemmer {
    pub fn new() -> Self {
        // RawTokenizer 把整个输入当作一个词元，多词输入因此作为整体提取词干
        let analyzer = TextAnalyzer::builder(RawTokenizer::default())
            .filter(LowerCaser)
            .filter(SnowballStemmer::new(Language::English))
            .build();
        Self { analyzer }
    }

    /// 提取单个词的词干
    pub fn stem(&self, token: &str) -> String {
        let mut analyzer = self.analyzer.clone();
        stem_with(&mut analyzer, token)
    }

    /// 逐个提取词干，保持顺序和重复项
    pub fn stem_all<I, S>(&self, tokens: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut analyzer = self.analyzer.clone();
        tokens
            .into_iter()
            .map(|token| stem_with(&mut analyzer, token.as_ref()))
            .collect()
    }
}

impl Default for Stemmer {
    fn default() -> Self {
        Self::new()
    }
}

fn stem_with(analyzer: &mut TextAnalyzer, token: &str) -> String {
    let mut stream = analyzer.token_stream(token);
    if stream.advance() {
        stream.token().text.clone()
    } else {
        String::new()
    }
}
