//! Mock translator for testing without a translation service.
//!
//! Looks phrases up in a fixed dictionary and tags anything it does not
//! know with the target language, so output is deterministic.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::backend::Translator;
use super::error::TranslationError;

/// Deterministic in-memory translator.
#[derive(Debug, Default)]
pub struct MockTranslator {
    dictionary: HashMap<String, String>,
    failing: bool,
    calls: AtomicUsize,
}

impl MockTranslator {
    /// Create a mock with an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock whose every call fails.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Add a known translation.
    pub fn with_phrase(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.dictionary.insert(source.into(), target.into());
        self
    }

    /// Number of times the backend has been called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Translator for MockTranslator {
    fn name(&self) -> &str {
        "mock"
    }

    async fn translate(
        &self,
        text: &str,
        _source: &str,
        target: &str,
    ) -> Result<String, TranslationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.failing {
            return Err(TranslationError::Backend("mock backend unavailable".into()));
        }

        Ok(self
            .dictionary
            .get(text)
            .cloned()
            .unwrap_or_else(|| format!("[{target}] {text}")))
    }
}
