//! Per-field translation with graceful fallback.

use std::sync::Arc;

use futures::future::join_all;
use tracing::warn;

use super::backend::Translator;
use super::error::TranslationError;

/// Language NS publishes its text in.
pub const SOURCE_LANGUAGE: &str = "nl";

/// Language the report is translated to unless configured otherwise.
pub const DEFAULT_TARGET_LANGUAGE: &str = "en";

/// Outcome of translating one field.
#[derive(Debug)]
pub enum Translation {
    /// Nothing to translate (blank text, or source and target are the same).
    Unchanged(String),
    /// The backend returned a translation.
    Translated(String),
    /// The backend failed; the original text is kept.
    Fallback {
        original: String,
        error: TranslationError,
    },
}

impl Translation {
    /// The text to show: the translation if there is one, else the original.
    pub fn into_text(self) -> String {
        match self {
            Translation::Unchanged(text) | Translation::Translated(text) => text,
            Translation::Fallback { original, .. } => original,
        }
    }
}

#[cfg(test)]
impl Translation {
    fn is_fallback(&self) -> bool {
        matches!(self, Translation::Fallback { .. })
    }
}

/// Translates individual report fields from Dutch.
///
/// A backend failure never escapes: it is logged and the original text is
/// used instead, so a translation outage degrades the report rather than
/// aborting it. Every call is independent; nothing is cached.
#[derive(Clone)]
pub struct FieldTranslator {
    backend: Arc<dyn Translator>,
    source: String,
    target: String,
}

impl FieldTranslator {
    /// Create a translator from Dutch into `target`.
    pub fn new(backend: Arc<dyn Translator>, target: impl Into<String>) -> Self {
        Self {
            backend,
            source: SOURCE_LANGUAGE.to_string(),
            target: target.into(),
        }
    }

    /// Target language code.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Translate one field.
    pub async fn translate(&self, text: &str) -> Translation {
        let trimmed = text.trim();
        if trimmed.is_empty() || self.source.eq_ignore_ascii_case(&self.target) {
            return Translation::Unchanged(text.to_string());
        }

        match self
            .backend
            .translate(trimmed, &self.source, &self.target)
            .await
        {
            Ok(translated) => Translation::Translated(translated),
            Err(error) => {
                warn!(backend = self.backend.name(), %error, "translation failed, keeping original text");
                Translation::Fallback {
                    original: text.to_string(),
                    error,
                }
            }
        }
    }

    /// Translate one field and return the text to show.
    pub async fn translate_text(&self, text: &str) -> String {
        self.translate(text).await.into_text()
    }

    /// Translate several fields independently, keeping their order.
    pub async fn translate_all(&self, texts: &[String]) -> Vec<String> {
        join_all(texts.iter().map(|t| self.translate_text(t))).await
    }
}
