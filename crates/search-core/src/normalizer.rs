// search-core/src/normalizer.rs
//! 文本规范化模块
//!
//! 管线：Treebank 风格分词 -> 只保留字母数字词元 -> 小写 -> 过滤英文停用词。
//! 带连字符或词内标点的词（`thought-provoking`、`3.14`）整体被丢弃，
//! 缩略形式拆出的词干部分保留（`can't` -> `ca`）。

use once_cell::sync::Lazy;
use tantivy::tokenizer::{LowerCaser, StopWordFilter, TextAnalyzer, TokenStream};

use crate::config::IndexConfig;
use crate::tokenizer::{AlphanumericFilter, TreebankTokenizer};

/// 英文停用词表（NLTK english 语料）
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're",
    "you've", "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he",
    "him", "his", "himself", "she", "she's", "her", "hers", "herself", "it", "it's",
    "its", "itself", "they", "them", "their", "theirs", "themselves", "what",
    "which", "who", "whom", "this", "that", "that'll", "these", "those", "am", "is",
    "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about",
    "against", "between", "into", "through", "during", "before", "after", "above",
    "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under",
    "again", "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other", "some",
    "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very",
    "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn",
    "couldn't", "didn", "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn",
    "hasn't", "haven", "haven't", "isn", "isn't", "ma", "mightn", "mightn't",
    "mustn", "mustn't", "needn", "needn't", "shan", "shan't", "shouldn",
    "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// 进程级共享的停用词过滤器，初始化后只读。
///
/// `StopWordFilter` 内部以 `Arc` 持有词表，克隆只增加引用计数。
static ENGLISH_STOP_FILTER: Lazy<StopWordFilter> = Lazy::new(|| {
    StopWordFilter::remove(ENGLISH_STOP_WORDS.iter().map(|word| word.to_string()))
});

/// 检查一个（已小写的）词是否在内置停用词表中
pub fn is_stop_word(word: &str) -> bool {
    ENGLISH_STOP_WORDS.contains(&word)
}

/// 文本规范化器
#[derive(Clone)]
pub struct Normalizer {
    analyzer: TextAnalyzer,
}

impl Normalizer {
    /// 使用内置停用词表创建
    pub fn new() -> Self {
        Self::with_stop_filter(ENGLISH_STOP_FILTER.clone())
    }

    /// 根据配置创建，配置中的额外停用词追加到内置表之后
    pub fn with_config(config: &IndexConfig) -> Self {
        if config.extra_stop_words.is_empty() {
            return Self::new();
        }

        let words = ENGLISH_STOP_WORDS
            .iter()
            .map(|word| word.to_string())
            .chain(config.extra_stop_words.iter().map(|word| word.to_lowercase()));
        Self::with_stop_filter(StopWordFilter::remove(words))
    }

    fn with_stop_filter(stop_filter: StopWordFilter) -> Self {
        let analyzer = TextAnalyzer::builder(TreebankTokenizer)
            .filter(AlphanumericFilter)
            .filter(LowerCaser)
            .filter(stop_filter)
            .build();
        Self { analyzer }
    }

    /// 将原始文本切分为规范化词元，保持原有顺序并保留重复项
    pub fn normalize(&self, raw_text: &str) -> Vec<String> {
        // token_stream 需要 &mut，克隆后各调用互不影响
        let mut analyzer = self.analyzer.clone();
        let mut stream = analyzer.token_stream(raw_text);

        let mut tokens = Vec::new();
        stream.process(&mut |token| tokens.push(token.text.clone()));
        tokens
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_normalize_drops_stop_words_and_punctuation() {
        let normalizer = Normalizer::new();
        assert_eq!(
            normalizer.normalize("The quick brown fox jumps."),
            vec!["quick", "brown", "fox", "jumps"]
        );
    }

    #[rstest]
    #[case("")]
    #[case("   \n\t ")]
    #[case("... !!! ,,, ;")]
    #[case("The AND is, of: the!")]
    #[case("You'll be what they don't.")]
    fn test_normalize_yields_nothing(#[case] input: &str) {
        assert!(Normalizer::new().normalize(input).is_empty());
    }

    #[rstest]
    #[case("Hello, WORLD", vec!["hello", "world"])]
    #[case("fox fox FOX", vec!["fox", "fox", "fox"])]
    #[case("Café Über naïve", vec!["café", "über", "naïve"])]
    #[case("version 2 of rust2024", vec!["version", "2", "rust2024"])]
    #[case("e-mail re-entry", vec![])]
    #[case("thought-provoking content", vec!["content"])]
    #[case("pi is 3.14 U.S.", vec!["pi"])]
    #[case("I can't, and won't.", vec!["ca", "wo"])]
    #[case("3,000 items: 42 left", vec!["items", "42", "left"])]
    #[case("It’s the fox’s den", vec!["fox", "den"])]
    fn test_normalize_cases(#[case] input: &str, #[case] expected: Vec<&str>) {
        assert_eq!(Normalizer::new().normalize(input), expected);
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let normalizer = Normalizer::new();
        let text = "Welcome to the first document! This document serves as a foundational piece.";
        assert_eq!(normalizer.normalize(text), normalizer.normalize(text));
    }

    #[test]
    fn test_no_stop_word_survives() {
        let normalizer = Normalizer::new();
        // 带撇号的停用词会被拆开（`won't` -> `wo`），这里只看整词
        let text = ENGLISH_STOP_WORDS
            .iter()
            .filter(|word| !word.contains('\''))
            .copied()
            .collect::<Vec<_>>()
            .join(", ");
        let tokens = normalizer.normalize(&text);
        assert!(tokens.is_empty(), "unexpected tokens: {:?}", tokens);
    }

    #[test]
    fn test_extra_stop_words_from_config() {
        let config = IndexConfig::with_extra_stop_words(["Document", "piece"]);
        let normalizer = Normalizer::with_config(&config);
        assert_eq!(
            normalizer.normalize("The first document is a foundational piece"),
            vec!["first", "foundational"]
        );
    }

    #[test]
    fn test_is_stop_word() {
        assert!(is_stop_word("the"));
        assert!(is_stop_word("don"));
        assert!(!is_stop_word("fox"));
    }
}
