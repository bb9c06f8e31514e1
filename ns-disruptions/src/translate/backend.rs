//! Translation backend trait.

use async_trait::async_trait;

use super::error::TranslationError;

/// A text-to-text translation service.
///
/// Implementations make one attempt per call and report any failure; the
/// fallback policy lives in [`FieldTranslator`](super::FieldTranslator).
#[async_trait]
pub trait Translator: Send + Sync {
    /// Human-readable backend name.
    fn name(&self) -> &str;

    /// Translate `text` from `source` to `target` (ISO 639-1 codes).
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslationError>;
}

/// Backend that returns its input untouched. Used for `--no-translate`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

#[async_trait]
impl Translator for IdentityTranslator {
    fn name(&self) -> &str {
        "identity"
    }

    async fn translate(
        &self,
        text: &str,
        _source: &str,
        _target: &str,
    ) -> Result<String, TranslationError> {
        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn identity_returns_input() {
        let t = IdentityTranslator;
        assert_eq!(t.name(), "identity");
        assert_eq!(
            t.translate("Werkzaamheden", "nl", "en").await.unwrap(),
            "Werkzaamheden"
        );
    }
}
