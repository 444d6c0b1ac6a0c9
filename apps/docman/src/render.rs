//! 控制台排版：所有输出都画在 66 列的星号框内

pub const RULE: &str = "******************************************************************";

/// 文档内容每行最多字符数
const CONTENT_WIDTH: usize = 44;
/// 词干列表每行最大宽度
const STEM_LINE_WIDTH: usize = 60;
/// 分词结果每行词数
const TOKENS_PER_LINE: usize = 5;

pub fn menu(entries: &[(char, &str)]) -> Vec<String> {
    let mut lines = vec![RULE.to_string(), RULE.to_string()];
    lines.push(format!("**           {:<51}**", "Menu:"));
    for (key, label) in entries {
        lines.push(format!("**           {}: {:<48}**", key, label));
    }
    lines.push(RULE.to_string());
    lines.push(RULE.to_string());
    lines
}

/// 可选文档列表，`verb` 如 "Read" / "tokenize"
pub fn document_list(verb: &str, documents: &[String]) -> Vec<String> {
    let mut lines = vec![
        RULE.to_string(),
        format!("**               Documents Available to {:<24}**", verb),
        RULE.to_string(),
    ];
    for (idx, name) in documents.iter().enumerate() {
        lines.push(format!("**             {}. {:<45} **", idx + 1, name));
    }
    lines.push(RULE.to_string());
    lines.push(RULE.to_string());
    lines
}

pub fn document_content(name: &str, text: &str) -> Vec<String> {
    let mut lines = vec![
        RULE.to_string(),
        "**                       Document Content                       **".to_string(),
        format!("**              Filename: {:<37} **", name),
        RULE.to_string(),
    ];
    for line in text.split('\n') {
        for chunk in wrap_chars(line, CONTENT_WIDTH) {
            lines.push(format!("**     {:<56} **", chunk));
        }
    }
    lines.push(RULE.to_string());
    lines
}

pub fn token_table(name: &str, tokens: &[String]) -> Vec<String> {
    let mut lines = vec![
        RULE.to_string(),
        format!("**              Filename: {:<37} **", name),
        "**                  Tokenized Words                             **".to_string(),
        RULE.to_string(),
    ];

    let mut body = vec!["Tokens:".to_string()];
    body.extend(tokens.chunks(TOKENS_PER_LINE).map(|chunk| chunk.join(", ")));
    body.push(String::new());

    lines.extend(body.iter().map(|line| format!("** {:<60} **", line)));
    lines.push(RULE.to_string());
    lines
}

pub fn stem_table(name: &str, stems: &[String]) -> Vec<String> {
    let mut lines = vec![
        RULE.to_string(),
        format!("**                 Filename: {:<34} **", name),
        "**                     Stemmed Tokens                           **".to_string(),
        RULE.to_string(),
    ];

    let mut current = String::new();
    for stem in stems {
        if current.chars().count() + stem.chars().count() + 2 > STEM_LINE_WIDTH {
            lines.push(format!("** {:<60} **", current));
            current = stem.clone();
        } else {
            if !current.is_empty() {
                current.push_str(", ");
            }
            current.push_str(stem);
        }
    }
    if !current.is_empty() {
        lines.push(format!("** {:<60} **", current));
    }

    lines.push(RULE.to_string());
    lines
}

pub fn search_results(term: &str, results: &[String]) -> Vec<String> {
    if results.is_empty() {
        return vec![format!("No documents contain the term '{}'.", term)];
    }

    let mut lines = vec![
        RULE.to_string(),
        format!("** Documents containing the term '{}':                    **", term),
        RULE.to_string(),
    ];
    for name in results {
        lines.push(format!("** {:<60} **", name));
    }
    lines.push(RULE.to_string());
    lines
}

/// 按字符数切分，不在 UTF-8 字符中间断开
fn wrap_chars(line: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}
