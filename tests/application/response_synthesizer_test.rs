use std::sync::Arc;

use docforge::application::ports::VectorIndex;
use docforge::application::services::{ResponseSynthesizer, SYSTEM_MESSAGE};
use docforge::domain::{Embedding, IndexedVector, ModelProvider, TextChunk};
use docforge::infrastructure::persistence::InMemoryVectorIndex;

use crate::helpers::{FixedEmbedder, ScriptedLlm};

fn synthesizer(
    index: Arc<InMemoryVectorIndex>,
    openai: Arc<ScriptedLlm>,
    gemini: Arc<ScriptedLlm>,
) -> ResponseSynthesizer {
    ResponseSynthesizer::new(Arc::new(FixedEmbedder), index, openai, gemini, 3)
}

#[tokio::test]
async fn given_empty_index_when_retrieving_context_then_returns_empty_string() {
    let synth = synthesizer(
        Arc::new(InMemoryVectorIndex::new()),
        Arc::new(ScriptedLlm::always("{}")),
        Arc::new(ScriptedLlm::always("{}")),
    );

    let context = synth.retrieve_context("anything").await.unwrap();

    assert_eq!(context, "");
}

#[tokio::test]
async fn given_indexed_chunks_when_retrieving_context_then_joins_top_matches_with_blank_lines() {
    let index = Arc::new(InMemoryVectorIndex::new());
    let vectors: Vec<IndexedVector> = ["one", "two", "three", "four"]
        .iter()
        .enumerate()
        .map(|(i, text)| {
            IndexedVector::from_chunk(
                TextChunk::new(text.to_string(), i),
                Embedding::new(vec![1.0, i as f32, 0.0, 0.0]),
            )
        })
        .collect();
    index.upsert(&vectors).await.unwrap();
    let synth = synthesizer(
        index,
        Arc::new(ScriptedLlm::always("{}")),
        Arc::new(ScriptedLlm::always("{}")),
    );

    let context = synth.retrieve_context("query").await.unwrap();

    assert_eq!(context.split("\n\n").count(), 3);
}

#[tokio::test]
async fn given_openai_provider_when_generating_then_sends_system_message_and_strips_fences() {
    let openai = Arc::new(ScriptedLlm::always("```json\n{\"type\":\"text\",\"content\":\"ok\"}\n```"));
    let gemini = Arc::new(ScriptedLlm::always("{}"));
    let synth = synthesizer(
        Arc::new(InMemoryVectorIndex::new()),
        openai.clone(),
        gemini.clone(),
    );

    let reply = synth
        .generate("Say ok", "", ModelProvider::OpenAi)
        .await
        .unwrap();

    assert_eq!(reply, r#"{"type":"text","content":"ok"}"#);
    let calls = openai.calls();
    assert_eq!(calls[0].0.as_deref(), Some(SYSTEM_MESSAGE));
    assert!(calls[0].1.contains("Say ok"));
    assert!(gemini.calls().is_empty());
}

#[tokio::test]
async fn given_gemini_provider_when_generating_with_no_context_then_still_completes() {
    let gemini = Arc::new(ScriptedLlm::always(r#"{"type":"text","content":"hello"}"#));
    let synth = synthesizer(
        Arc::new(InMemoryVectorIndex::new()),
        Arc::new(ScriptedLlm::always("{}")),
        gemini.clone(),
    );

    let reply = synth
        .generate("Greet me", "", ModelProvider::Gemini)
        .await
        .unwrap();

    assert_eq!(reply, r#"{"type":"text","content":"hello"}"#);
    assert_eq!(gemini.calls().len(), 1);
}
