//! # Batch Translation
//!
//! File: cli/src/commands/translate/batch.rs
//!
//! Walks a source table in fixed-size chunks, one provider call per chunk, strictly
//! one after another. Each chunk's results are paired with its keys by position,
//! and the provider must return exactly one translation per text sent; anything
//! else aborts the run. Empty translations keep the source string.
//!
use super::provider::Translate;
use super::table::StringTable;
use crate::core::error::{NavigoError, Result};
use anyhow::Context;
use tracing::{debug, info};

pub async fn translate_table<T>(
    provider: &T,
    source: &StringTable,
    target: &str,
    batch_size: usize,
) -> Result<StringTable>
where
    T: Translate + ?Sized,
{
    if batch_size == 0 {
        anyhow::bail!(NavigoError::Config(
            "batch size must be greater than zero".to_string()
        ));
    }

    let total_chunks = source.len().div_ceil(batch_size);
    let mut translated = Vec::with_capacity(source.len());

    for (index, chunk) in source.entries().chunks(batch_size).enumerate() {
        let texts: Vec<String> = chunk.iter().map(|(_, text)| text.clone()).collect();
        info!(
            "Translating chunk {}/{} ({} strings) to '{}'",
            index + 1,
            total_chunks,
            texts.len(),
            target
        );

        let results = provider
            .translate_batch(&texts, target)
            .await
            .with_context(|| format!("Translating chunk {}/{} failed", index + 1, total_chunks))?;
        if results.len() != texts.len() {
            anyhow::bail!(NavigoError::TranslationMismatch {
                sent: texts.len(),
                received: results.len(),
            });
        }

        for ((key, original), text) in chunk.iter().zip(results) {
            if text.is_empty() {
                debug!("Empty translation for '{}', keeping source text", key);
                translated.push((key.clone(), original.clone()));
            } else {
                translated.push((key.clone(), text));
            }
        }
    }

    Ok(translated.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records every batch it receives and answers through `respond`.
    struct StubTranslator<F> {
        respond: F,
        batches: Mutex<Vec<Vec<String>>>,
    }

    impl<F> StubTranslator<F>
    where
        F: Fn(&[String], &str) -> Result<Vec<String>> + Send + Sync,
    {
        fn new(respond: F) -> Self {
            Self {
                respond,
                batches: Mutex::new(Vec::new()),
            }
        }

        fn batch_sizes(&self) -> Vec<usize> {
            self.batches.lock().unwrap().iter().map(Vec::len).collect()
        }
    }

    #[async_trait]
    impl<F> Translate for StubTranslator<F>
    where
        F: Fn(&[String], &str) -> Result<Vec<String>> + Send + Sync,
    {
        async fn translate_batch(&self, texts: &[String], target: &str) -> Result<Vec<String>> {
            self.batches.lock().unwrap().push(texts.to_vec());
            (self.respond)(texts, target)
        }
    }

    fn numbered_table(n: usize) -> StringTable {
        (0..n)
            .map(|i| (format!("key_{i:03}"), format!("text {i}")))
            .collect()
    }

    #[tokio::test]
    async fn test_empty_translation_keeps_source() {
        let source = StringTable::from_json_str(r#"{"a": "Hello", "b": "Bye"}"#).unwrap();
        let stub = StubTranslator::new(|_, target| {
            assert_eq!(target, "fr");
            Ok(vec![String::new(), "Au revoir".to_string()])
        });

        let out = translate_table(&stub, &source, "fr", 50).await.unwrap();
        let expected = "{\n  \"a\": \"Hello\",\n  \"b\": \"Au revoir\"\n}";
        assert_eq!(out.to_json_pretty().unwrap(), expected);
    }

    #[tokio::test]
    async fn test_multiple_chunks_keep_order_and_keys() {
        let source = numbered_table(120);
        let stub = StubTranslator::new(|texts, _| {
            Ok(texts.iter().map(|t| format!("fr:{t}")).collect())
        });

        let out = translate_table(&stub, &source, "fr", 50).await.unwrap();

        assert_eq!(stub.batch_sizes(), [50, 50, 20]);
        assert_eq!(out.len(), 120);
        assert!(out.keys().eq(source.keys()));
        for (key, value) in out.entries() {
            assert_eq!(value, &format!("fr:{}", source.get(key).unwrap()));
        }
    }

    #[tokio::test]
    async fn test_exact_multiple_of_batch_size() {
        let source = numbered_table(100);
        let stub = StubTranslator::new(|texts, _| Ok(texts.to_vec()));
        translate_table(&stub, &source, "de", 50).await.unwrap();
        assert_eq!(stub.batch_sizes(), [50, 50]);
    }

    #[tokio::test]
    async fn test_empty_source_makes_no_calls() {
        let stub = StubTranslator::new(|_, _| panic!("provider must not be called"));
        let out = translate_table(&stub, &StringTable::default(), "hi", 50)
            .await
            .unwrap();
        assert!(out.is_empty());
        assert!(stub.batch_sizes().is_empty());
    }

    #[tokio::test]
    async fn test_cardinality_mismatch_aborts() {
        let source = numbered_table(3);
        let stub = StubTranslator::new(|_, _| Ok(vec!["only one".to_string()]));
        let err = translate_table(&stub, &source, "ta", 50).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<NavigoError>(),
            Some(NavigoError::TranslationMismatch { sent: 3, received: 1 })
        ));
    }

    #[tokio::test]
    async fn test_provider_failure_stops_at_first_chunk() {
        let source = numbered_table(75);
        let stub = StubTranslator::new(|_, _| {
            Err(NavigoError::Provider("HTTP 500".to_string()).into())
        });
        let err = translate_table(&stub, &source, "ta", 50).await.unwrap_err();
        assert!(err.to_string().contains("Translating chunk 1/2 failed"));
        assert_eq!(stub.batch_sizes(), [50]);
    }

    #[tokio::test]
    async fn test_zero_batch_size_rejected() {
        let stub = StubTranslator::new(|texts, _| Ok(texts.to_vec()));
        assert!(translate_table(&stub, &numbered_table(2), "fr", 0).await.is_err());
    }
}
