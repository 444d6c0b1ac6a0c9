//! 端到端：.docx 文件 -> 处理 -> 搜索

use search_core::{
    DocumentSource, FileDocuments, IndexConfig, SearchEngine, StoreState, WriteMode,
};
use tempfile::TempDir;

fn engine_with(documents: &[(&str, &str)]) -> (TempDir, SearchEngine<FileDocuments>) {
    let dir = tempfile::tempdir().unwrap();
    let source = FileDocuments::new(dir.path());
    for (name, text) in documents {
        source.create(name, text).unwrap();
    }
    let engine = SearchEngine::open(source, &IndexConfig::default()).unwrap();
    (dir, engine)
}

#[test]
fn quick_fox_scenario() {
    let (_dir, mut engine) = engine_with(&[
        ("doc1.docx", "The quick brown fox jumps."),
        ("doc2.docx", "Quick thinking saves time."),
    ]);

    let raw = engine.source().read("doc1.docx").unwrap();
    assert_eq!(engine.normalize(&raw), vec!["quick", "brown", "fox", "jumps"]);

    assert_eq!(engine.search("jumping"), vec!["doc1.docx"]);
    assert!(engine.search("slow").is_empty());
    assert_eq!(engine.search("Quick"), vec!["doc1.docx", "doc2.docx"]);
}

#[test]
fn term_in_exactly_one_document_is_a_singleton() {
    let (_dir, mut engine) = engine_with(&[
        ("a.docx", "Rivers flow to the sea."),
        ("b.txt", "Mountains rise above clouds."),
        ("c.md", "Deserts stretch for miles."),
    ]);

    assert_eq!(engine.search("mountain"), vec!["b.txt"]);
    assert!(engine.search("glacier").is_empty());
}

#[test]
fn edits_are_invisible_until_reprocessed() {
    let (_dir, mut engine) = engine_with(&[
        ("doc1.docx", "The quick brown fox jumps."),
        ("doc2.docx", "Quick thinking saves time."),
    ]);

    assert_eq!(engine.search("fox"), vec!["doc1.docx"]);

    engine
        .source()
        .write("doc2.docx", "A second fox arrives.", WriteMode::Append)
        .unwrap();
    engine
        .source()
        .write("doc1.docx", "Only turtles now.", WriteMode::Replace)
        .unwrap();

    // 缓存未失效
    assert_eq!(engine.search("fox"), vec!["doc1.docx"]);

    engine.process_all();
    assert_eq!(engine.search("fox"), vec!["doc2.docx"]);
    assert_eq!(engine.search("turtles"), vec!["doc1.docx"]);
}

#[test]
fn corrupt_document_does_not_abort_processing() {
    let (dir, mut engine) = engine_with(&[("good.docx", "Healthy content here.")]);
    std::fs::write(dir.path().join("bad.docx"), b"garbage").unwrap();
    engine.store_mut().register("bad.docx");

    assert_eq!(engine.process_all(), 2);
    assert_eq!(engine.store().state(), StoreState::Processed);
    assert!(engine.get("bad.docx").unwrap().is_load_failure());
    assert_eq!(engine.search("healthy"), vec!["good.docx"]);
}

#[test]
fn process_all_twice_is_identical() {
    let (_dir, mut engine) = engine_with(&[
        ("one.docx", "Welcome to the first document!"),
        ("two.docx", "In this second document, we delve deeper."),
    ]);

    engine.process_all();
    let first: Vec<_> = engine.store().documents().cloned().collect();
    engine.process_all();
    let second: Vec<_> = engine.store().documents().cloned().collect();
    assert_eq!(first, second);
}
