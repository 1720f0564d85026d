use thiserror::Error;

/// Glyph substituted for a character the transliterator cannot resolve.
///
/// It never equals a typed query character, so it only acts as a gap for the
/// fuzzy matcher.
pub const PLACEHOLDER: char = '\0';

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransliterationError {
    #[error("transliterator unavailable")]
    Unavailable,

    #[error("transliteration failed: {0}")]
    Failed(String),
}

/// Romanizes a run of non-ASCII text into ASCII initials.
///
/// Contract:
/// - The output carries no guaranteed character-level fidelity.
/// - Implementations may return [`PLACEHOLDER`] for glyphs they do not know.
/// - Returning an error never aborts key building; the caller degrades to one
///   placeholder per glyph of the run.
pub trait Transliterator: Send + Sync {
    fn transliterate(&self, run: &str) -> Result<String, TransliterationError>;
}

/// Transliterator used when no initials table is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTransliterator;

impl Transliterator for NoTransliterator {
    fn transliterate(&self, _run: &str) -> Result<String, TransliterationError> {
        Err(TransliterationError::Unavailable)
    }
}

#[cfg(test)]
mockall::mock! {
    pub Transliterator {}

    impl Transliterator for Transliterator {
        fn transliterate(&self, run: &str) -> Result<String, TransliterationError>;
    }
}
