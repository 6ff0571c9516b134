mod table;

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// The built-in table, loaded once on first use and never mutated afterwards.
static BUILTIN: Lazy<GlyphTable> = Lazy::new(|| GlyphTable::from_entries(table::GLYPH_SETS));

/// Lookup from a canonical character to its look-alike glyphs.
#[derive(Debug, Clone, Default)]
pub struct GlyphTable {
    sets: HashMap<char, &'static [&'static str]>,
}

impl GlyphTable {
    /// The process-wide built-in table.
    pub fn builtin() -> &'static GlyphTable {
        &BUILTIN
    }

    /// Build a table from `(canonical character, glyphs)` pairs.
    ///
    /// Keys are expected to already be canonical. A later pair for the same key replaces an
    /// earlier one.
    pub fn from_entries(entries: &[(char, &'static [&'static str])]) -> Self {
        let sets = entries.iter().copied().collect();
        Self { sets }
    }

    /// Normalize a character into the key used for lookups.
    ///
    /// Letters are upper-cased; anything whose upper-case form spans several characters
    /// (`ß` becomes `SS`) has no canonical key.
    pub fn canonical(ch: char) -> Option<char> {
        let mut upper = ch.to_uppercase();
        match (upper.next(), upper.next()) {
            (Some(key), None) => Some(key),
            _ => None,
        }
    }

    /// Get the substitute glyphs for a character, matching letters case-insensitively.
    pub fn lookup(&self, ch: char) -> Option<&'static [&'static str]> {
        let key = Self::canonical(ch)?;
        self.sets.get(&key).copied()
    }

    /// Whether the character has an entry in this table.
    pub fn contains(&self, ch: char) -> bool {
        self.lookup(ch).is_some()
    }

    /// All entries, letters first, then digits, then everything else in code point order.
    pub fn entries(&self) -> Vec<(char, &'static [&'static str])> {
        let mut entries: Vec<_> = self.sets.iter().map(|(key, glyphs)| (*key, *glyphs)).collect();
        entries.sort_by_key(|(key, _)| (!key.is_alphabetic(), !key.is_ascii_digit(), *key));
        entries
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }
}
