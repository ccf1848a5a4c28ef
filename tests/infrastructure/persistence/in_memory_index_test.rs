use docforge::application::ports::VectorIndex;
use docforge::domain::{Embedding, IndexedVector, TextChunk};
use docforge::infrastructure::persistence::InMemoryVectorIndex;

fn vector(text: &str, values: Vec<f32>) -> IndexedVector {
    IndexedVector::from_chunk(TextChunk::new(text.to_string(), 0), Embedding::new(values))
}

#[tokio::test]
async fn given_vectors_when_querying_then_returns_best_matches_first() {
    let index = InMemoryVectorIndex::new();
    index
        .upsert(&[
            vector("east", vec![1.0, 0.0]),
            vector("north", vec![0.0, 1.0]),
            vector("north-east", vec![0.7, 0.7]),
        ])
        .await
        .unwrap();

    let results = index
        .query(&Embedding::new(vec![0.0, 1.0]), 2)
        .await
        .unwrap();

    let texts: Vec<&str> = results.iter().map(|r| r.text.as_str()).collect();
    assert_eq!(texts, vec!["north", "north-east"]);
    assert!(results[0].score > results[1].score);
}

#[tokio::test]
async fn given_populated_index_when_deleting_all_then_count_is_zero() {
    let index = InMemoryVectorIndex::new();
    index
        .upsert(&[vector("a", vec![1.0]), vector("b", vec![0.5])])
        .await
        .unwrap();
    assert_eq!(index.record_count().await.unwrap(), 2);

    index.delete_all().await.unwrap();

    assert_eq!(index.record_count().await.unwrap(), 0);
    assert!(
        index
            .query(&Embedding::new(vec![1.0]), 3)
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn given_existing_id_when_upserting_then_replaces_record() {
    let index = InMemoryVectorIndex::new();
    let original = vector("before", vec![1.0, 0.0]);
    let mut replacement = original.clone();
    replacement.text = "after".to_string();

    index.upsert(&[original]).await.unwrap();
    index.upsert(&[replacement]).await.unwrap();

    assert_eq!(index.record_count().await.unwrap(), 1);
    let results = index
        .query(&Embedding::new(vec![1.0, 0.0]), 1)
        .await
        .unwrap();
    assert_eq!(results[0].text, "after");
}
