//! Loading pinyin initials tables from disk.
//! 从磁盘加载拼音首字母表。

use std::path::Path;

use anyhow::{Context, Result};
use tokio::fs;
use tracing::{info, warn};
use tw_core::pinyin::InitialsTable;

/// Loads the initials table at `path`.
///
/// - An empty path selects the built-in table.
/// - `*.tsv` files are parsed as `char<TAB>romanization` lines, anything else
///   as a dense charmap.
/// - A missing file falls back to the built-in table with a warning.
///
/// Unreadable or malformed files are errors.
pub async fn load_initials_table(path: &Path) -> Result<InitialsTable> {
    if path.as_os_str().is_empty() {
        return Ok(InitialsTable::builtin());
    }

    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "Initials table not found, using built-in table");
            return Ok(InitialsTable::builtin());
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("read initials table failed: {}", path.display()))
        }
    };

    let is_tsv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("tsv"));
    let table = if is_tsv {
        InitialsTable::from_tsv(&content)
            .with_context(|| format!("parse initials table failed: {}", path.display()))?
    } else {
        InitialsTable::from_charmap(&content)
    };

    info!(path = %path.display(), glyphs = table.len(), "Loaded initials table");
    Ok(table)
}
