// search-core/src/tokenizer.rs
//! Penn Treebank 风格的英文分词器与纯字母数字过滤器
//!
//! 先按空白切块，再在块内拆出标点和缩略后缀：
//! - `? ! ; @ # $ % & ( ) [ ] { } < > "`、弯引号、`...`、`--` 单独成词；
//! - `,` `:` 仅在后面不是数字时拆开，`3,000` 保持完整；
//! - 只有句末的 `.` 被拆开，词内的 `.` 保留（`3.14`、`U.S.`）；
//! - 连字符留在词内（`thought-provoking`）；
//! - `n't` `'s` `'ll` 等后缀拆成独立词元（`can't` -> `ca` + `n't`）。
//!
//! 分词器输出包含标点，由 [`AlphanumericFilter`] 只保留全部由字母数字组成的词元。

use tantivy::tokenizer::{Token, TokenFilter, TokenStream, Tokenizer};

/// 单独成词的标点
const SPLIT_CHARS: &[char] = &[
    '?', '!', ';', '@', '#', '$', '%', '&', '(', ')', '[', ']', '{', '}', '<', '>', '"', '`',
    '“', '”', '‘', '’', '«', '»', '„', '…',
];

/// 句末 `.` 之后允许出现的收尾标点
const CLOSING_CHARS: &[char] = &[')', ']', '}', '>', '"', '\'', '”', '’', '»'];

/// 词尾缩略后缀，按匹配优先级排列
const CLITICS: &[&str] = &["n't", "'ll", "'re", "'ve", "'s", "'m", "'d"];

/// 整词拆分：(词, 拆分位置)
const SPLIT_WORDS: &[(&str, usize)] = &[
    ("cannot", 3),
    ("gimme", 3),
    ("gonna", 3),
    ("gotta", 3),
    ("lemme", 3),
    ("wanna", 3),
    ("d'ye", 1),
    ("more'n", 4),
    ("'tis", 2),
    ("'twas", 2),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct TreebankTokenizer;

pub struct TreebankTokenStream {
    tokens: Vec<Token>,
    cursor: usize,
}

impl Tokenizer for TreebankTokenizer {
    type TokenStream<'a> = TreebankTokenStream;

    fn token_stream<'a>(&'a mut self, text: &'a str) -> Self::TokenStream<'a> {
        let tokens = split(text)
            .into_iter()
            .enumerate()
            .map(|(position, (offset_from, offset_to))| Token {
                offset_from,
                offset_to,
                position,
                text: text[offset_from..offset_to].to_string(),
                ..Token::default()
            })
            .collect();
        TreebankTokenStream { tokens, cursor: 0 }
    }
}

impl TokenStream for TreebankTokenStream {
    fn advance(&mut self) -> bool {
        if self.cursor < self.tokens.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    fn token(&self) -> &Token {
        &self.tokens[self.cursor - 1]
    }

    fn token_mut(&mut self) -> &mut Token {
        &mut self.tokens[self.cursor - 1]
    }
}

/// 丢弃含有非字母数字字符的词元（Unicode 意义下）
#[derive(Debug, Clone, Copy, Default)]
pub struct AlphanumericFilter;

impl TokenFilter for AlphanumericFilter {
    type Tokenizer<T: Tokenizer> = AlphanumericFilterWrapper<T>;

    fn transform<T: Tokenizer>(self, tokenizer: T) -> Self::Tokenizer<T> {
        AlphanumericFilterWrapper(tokenizer)
    }
}

#[derive(Clone)]
pub struct AlphanumericFilterWrapper<T>(T);

impl<T: Tokenizer> Tokenizer for AlphanumericFilterWrapper<T> {
    type TokenStream<'a> = AlphanumericFilterStream<T::TokenStream<'a>>;

    fn token_stream<'a>(&'a mut self, text: &'a str) -> Self::TokenStream<'a> {
        AlphanumericFilterStream {
            tail: self.0.token_stream(text),
        }
    }
}

pub struct AlphanumericFilterStream<T> {
    tail: T,
}

impl<T: TokenStream> TokenStream for AlphanumericFilterStream<T> {
    fn advance(&mut self) -> bool {
        while self.tail.advance() {
            if is_alphanumeric(&self.tail.token().text) {
                return true;
            }
        }
        false
    }

    fn token(&self) -> &Token {
        self.tail.token()
    }

    fn token_mut(&mut self) -> &mut Token {
        self.tail.token_mut()
    }
}

pub fn is_alphanumeric(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphanumeric)
}

/// 文本 -> 词元的字节区间
fn split(text: &str) -> Vec<(usize, usize)> {
    let chunks = whitespace_chunks(text);
    let mut spans = Vec::new();
    for (idx, &(start, chunk)) in chunks.iter().enumerate() {
        // 下一块以小写字母开头时视为同一句
        let sentence_end = chunks.get(idx + 1).is_none_or(|(_, next)| !starts_lowercase(next));
        split_chunk(chunk, start, sentence_end, &mut spans);
    }
    spans
}

fn whitespace_chunks(text: &str) -> Vec<(usize, &str)> {
    let mut chunks = Vec::new();
    let mut start = None;
    for (idx, c) in text.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(from)) => {
                chunks.push((from, &text[from..idx]));
                start = None;
            }
            (false, None) => start = Some(idx),
            _ => {}
        }
    }
    if let Some(from) = start {
        chunks.push((from, &text[from..]));
    }
    chunks
}

fn starts_lowercase(chunk: &str) -> bool {
    chunk
        .chars()
        .find(|c| c.is_alphanumeric())
        .is_some_and(char::is_lowercase)
}

enum Segment {
    Word(usize, usize),
    Punct(usize, usize),
}

fn split_chunk(chunk: &str, base: usize, sentence_end: bool, spans: &mut Vec<(usize, usize)>) {
    let mut segments = punctuation_segments(chunk);

    if sentence_end {
        split_final_period(chunk, &mut segments);
    }

    for segment in segments {
        match segment {
            Segment::Punct(from, to) => spans.push((base + from, base + to)),
            Segment::Word(from, to) => match contraction_at(&chunk[from..to]) {
                Some(at) => {
                    spans.push((base + from, base + from + at));
                    spans.push((base + from + at, base + to));
                }
                None => spans.push((base + from, base + to)),
            },
        }
    }
}

fn punctuation_segments(chunk: &str) -> Vec<Segment> {
    let chars: Vec<(usize, char)> = chunk.char_indices().collect();
    let mut segments = Vec::new();
    let mut word_start = None;
    let mut i = 0;

    while i < chars.len() {
        let (at, c) = chars[i];
        let next = chars.get(i + 1).map(|&(_, n)| n);

        let punct_len = if SPLIT_CHARS.contains(&c) {
            1
        } else if matches!(c, ',' | ':') && !next.is_some_and(|n| n.is_ascii_digit()) {
            1
        } else if c == '-' && next == Some('-') {
            chars[i..].iter().take_while(|&&(_, d)| d == '-').count()
        } else if c == '.' && next == Some('.') && chars.get(i + 2).is_some_and(|&(_, d)| d == '.') {
            3
        } else {
            0
        };

        if punct_len == 0 {
            word_start.get_or_insert(at);
            i += 1;
            continue;
        }

        if let Some(from) = word_start.take() {
            segments.push(Segment::Word(from, at));
        }
        let end = chars.get(i + punct_len).map_or(chunk.len(), |&(b, _)| b);
        segments.push(Segment::Punct(at, end));
        i += punct_len;
    }

    if let Some(from) = word_start {
        segments.push(Segment::Word(from, chunk.len()));
    }
    segments
}

/// 最后一个词以 `.` 结尾且其后只有收尾标点时，拆出句号
fn split_final_period(chunk: &str, segments: &mut Vec<Segment>) {
    let Some(last_word) = segments.iter().rposition(|s| matches!(s, Segment::Word(..))) else {
        return;
    };
    let only_closers = segments[last_word + 1..].iter().all(|s| match *s {
        Segment::Punct(from, to) => chunk[from..to].chars().all(|c| CLOSING_CHARS.contains(&c)),
        Segment::Word(..) => false,
    });
    let Segment::Word(from, to) = segments[last_word] else {
        return;
    };
    let word = &chunk[from..to];
    if !only_closers || !word.ends_with('.') || word.len() < 2 || word[..word.len() - 1].ends_with('.') {
        return;
    }

    segments[last_word] = Segment::Word(from, to - 1);
    segments.insert(last_word + 1, Segment::Punct(to - 1, to));
}

/// 缩略形式的拆分位置（字节下标）
fn contraction_at(word: &str) -> Option<usize> {
    if let Some(&(_, at)) = SPLIT_WORDS.iter().find(|(w, _)| word.eq_ignore_ascii_case(w)) {
        return Some(at);
    }

    let bytes = word.as_bytes();
    for clitic in CLITICS {
        let n = clitic.len();
        if bytes.len() > n && bytes[bytes.len() - n..].eq_ignore_ascii_case(clitic.as_bytes()) {
            let at = bytes.len() - n;
            if bytes[at - 1] != b'\'' {
                return Some(at);
            }
        }
    }

    if bytes.len() > 1 && bytes.last() == Some(&b'\'') {
        return Some(bytes.len() - 1);
    }
    None
}
