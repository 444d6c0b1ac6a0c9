//! 显式处理输出完成日志；搜索触发的隐式处理不输出

use std::io;
use std::sync::{Arc, Mutex};

use search_core::{DocumentStore, MemoryDocuments, SearchEngine};

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture_logs<F: FnOnce()>(f: F) -> String {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);

    let bytes = buffer.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

fn engine() -> SearchEngine<MemoryDocuments> {
    let source = MemoryDocuments::with_documents([
        ("doc1", "The quick brown fox jumps."),
        ("doc2", "Quick thinking saves time."),
    ]);
    SearchEngine::new(DocumentStore::new(source, ["doc1", "doc2", "missing"]))
}

#[test]
fn lazy_processing_is_silent_but_explicit_processing_logs() {
    let mut explicit = engine();
    let explicit_logs = capture_logs(|| {
        explicit.process_all();
        assert_eq!(explicit.search("jumping"), vec!["doc1"]);
    });
    assert!(explicit_logs.contains("Processed all documents"), "{explicit_logs}");
    assert!(explicit_logs.contains("已处理: doc1"), "{explicit_logs}");

    let mut lazy = engine();
    let mut results = Vec::new();
    let lazy_logs = capture_logs(|| {
        results = lazy.search("jumping");
    });
    assert_eq!(results, vec!["doc1"]);
    assert!(!lazy_logs.contains("Processed all documents"), "{lazy_logs}");
    assert!(!lazy_logs.contains("已处理"), "{lazy_logs}");
    // 读取失败和搜索本身照常记录
    assert!(lazy_logs.contains("Error reading missing"), "{lazy_logs}");
    assert!(lazy_logs.contains("Searched for term 'jumping'"), "{lazy_logs}");
}
