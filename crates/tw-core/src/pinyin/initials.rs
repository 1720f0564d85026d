use std::collections::HashMap;

use thiserror::Error;

use crate::ports::transliterator::{TransliterationError, Transliterator, PLACEHOLDER};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InitialsTableError {
    #[error("invalid initials line {line}: {reason}")]
    InvalidLine { line: usize, reason: String },
}

/// Code point → romanized initial lookup table.
/// 码点到拼音首字母的查找表。
///
/// `A`–`Z` always map to their lowercase letter; anything absent from the table
/// transliterates to [`PLACEHOLDER`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitialsTable {
    map: HashMap<char, char>,
}

impl InitialsTable {
    /// Empty table (only `A`–`Z`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a dense charmap: the i-th character of `charmap` is the initial
    /// of code point `i`, `'\0'` meaning "no initial".
    ///
    /// # Examples
    ///
    /// ```
    /// use tw_core::pinyin::InitialsTable;
    ///
    /// // code points 0..=2 have no initial, code point 3 maps to 'x'
    /// let table = InitialsTable::from_charmap("\0\0\0x");
    /// assert_eq!(table.initial('\u{3}'), Some('x'));
    /// ```
    pub fn from_charmap(charmap: &str) -> Self {
        let map = charmap
            .chars()
            .enumerate()
            .filter(|(_, initial)| initial.is_ascii_alphabetic())
            .filter_map(|(code, initial)| {
                let code = u32::try_from(code).ok()?;
                Some((char::from_u32(code)?, initial.to_ascii_lowercase()))
            })
            .collect();
        Self { map }
    }

    /// Parses `char<TAB>romanization` lines.
    ///
    /// The initial is the first ASCII letter of the romanization, lowercased.
    /// Blank lines and `#` comments are skipped, as are lines whose
    /// romanization has no letter. A line without a tab or with more than one
    /// character in the first column is an error.
    pub fn from_tsv(tsv: &str) -> Result<Self, InitialsTableError> {
        let mut map = HashMap::new();

        for (idx, raw) in tsv.lines().enumerate() {
            let line = raw.trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }

            let (glyph, roman) = line.split_once('\t').ok_or_else(|| InitialsTableError::InvalidLine {
                line: idx + 1,
                reason: "missing tab separator".to_string(),
            })?;

            let mut chars = glyph.chars();
            let glyph = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => {
                    return Err(InitialsTableError::InvalidLine {
                        line: idx + 1,
                        reason: format!("expected a single character, got {glyph:?}"),
                    })
                }
            };

            if let Some(initial) = roman.chars().find(|c| c.is_ascii_alphabetic()) {
                map.insert(glyph, initial.to_ascii_lowercase());
            }
        }

        Ok(Self { map })
    }

    /// Adds or replaces one mapping.
    pub fn insert(&mut self, glyph: char, initial: char) {
        self.map.insert(glyph, initial.to_ascii_lowercase());
    }

    /// Initial of `glyph`, if known.
    pub fn initial(&self, glyph: char) -> Option<char> {
        if glyph.is_ascii_uppercase() {
            return Some(glyph.to_ascii_lowercase());
        }
        self.map.get(&glyph).copied()
    }

    /// Number of explicit mappings (the implicit `A`–`Z` are not counted).
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Transliterator for InitialsTable {
    fn transliterate(&self, run: &str) -> Result<String, TransliterationError> {
        Ok(run
            .chars()
            .map(|c| self.initial(c).unwrap_or(PLACEHOLDER))
            .collect())
    }
}
