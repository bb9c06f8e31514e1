//! Machine translation of Dutch report text.
//!
//! The backend is a [`Translator`]; [`FieldTranslator`] wraps one with the
//! language pair and the keep-the-original-on-failure policy.

mod backend;
mod error;
mod field;
mod google;
mod mock;

pub use backend::{IdentityTranslator, Translator};
pub use error::TranslationError;
pub use field::{DEFAULT_TARGET_LANGUAGE, FieldTranslator, SOURCE_LANGUAGE, Translation};
pub use google::{GoogleTranslateConfig, GoogleTranslator, MAX_CHARS};
pub use mock::MockTranslator;
