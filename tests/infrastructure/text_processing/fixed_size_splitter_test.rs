use docforge::application::ports::{TextSplitter, TextSplitterError};
use docforge::infrastructure::text_processing::FixedSizeSplitter;

#[tokio::test]
async fn given_text_when_splitting_then_chunks_concatenate_back_to_input() {
    let splitter = FixedSizeSplitter::new(7).unwrap();
    let text = "The quick brown fox jumps over the lazy dog";

    let chunks = splitter.split(text).await.unwrap();

    let rebuilt: String = chunks.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(rebuilt, text);
    for chunk in &chunks[..chunks.len() - 1] {
        assert_eq!(chunk.text.chars().count(), 7);
    }
    assert!(chunks.last().unwrap().text.chars().count() <= 7);
}

#[tokio::test]
async fn given_multibyte_text_when_splitting_then_counts_characters_not_bytes() {
    let splitter = FixedSizeSplitter::new(2).unwrap();

    let chunks = splitter.split("héllo").await.unwrap();

    let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, vec!["hé", "ll", "o"]);
    assert_eq!(chunks[2].offset, 4);
}

#[tokio::test]
async fn given_empty_text_when_splitting_then_returns_no_chunks() {
    let splitter = FixedSizeSplitter::new(1500).unwrap();

    let chunks = splitter.split("").await.unwrap();

    assert!(chunks.is_empty());
}

#[tokio::test]
async fn given_text_shorter_than_chunk_when_splitting_then_returns_single_chunk() {
    let splitter = FixedSizeSplitter::new(1500).unwrap();

    let chunks = splitter.split("short").await.unwrap();

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].text, "short");
}

#[test]
fn given_zero_chunk_size_when_creating_splitter_then_fails() {
    assert!(matches!(
        FixedSizeSplitter::new(0),
        Err(TextSplitterError::InvalidChunkSize)
    ));
}

#[tokio::test]
async fn given_chunks_when_splitting_then_ids_are_unique() {
    let splitter = FixedSizeSplitter::new(1).unwrap();

    let chunks = splitter.split("abc").await.unwrap();

    assert_ne!(chunks[0].id, chunks[1].id);
    assert!(chunks[0].id.as_str().starts_with("chunk-"));
}
