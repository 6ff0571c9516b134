use crate::glyphs::GlyphTable;
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

/// Glyphs already chosen during a session, keyed by canonical character.
///
/// Cloning the cache clones the handle: every clone reads and writes the same mapping, which is
/// how several activations share one dictionary.
#[derive(Debug, Clone, Default)]
pub struct SessionCache(Rc<RefCell<HashMap<char, String>>>);

impl SessionCache {
    /// Create a cache pre-seeded with the given choices.
    pub fn seeded<I, S>(choices: I) -> Self
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<String>,
    {
        let cache = Self::default();
        for (ch, glyph) in choices {
            cache.insert(ch, glyph);
        }
        cache
    }

    pub fn get(&self, ch: char) -> Option<String> {
        let key = GlyphTable::canonical(ch)?;
        self.0.borrow().get(&key).cloned()
    }

    /// Remember a choice. Characters without a canonical key are ignored.
    pub fn insert<S: Into<String>>(&self, ch: char, glyph: S) {
        if let Some(key) = GlyphTable::canonical(ch) {
            self.0.borrow_mut().insert(key, glyph.into());
        }
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// A sorted copy of the current choices.
    pub fn snapshot(&self) -> BTreeMap<char, String> {
        self.0.borrow().iter().map(|(key, glyph)| (*key, glyph.clone())).collect()
    }
}

/// How a [Translator] picks among the candidates for a character.
#[derive(Debug, Clone)]
pub struct TranslatorConfig {
    /// Draw a fresh glyph on every occurrence instead of reusing the first pick.
    pub randomize: bool,

    /// The choices reused when `randomize` is off.
    pub dictionary: SessionCache,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self { randomize: true, dictionary: SessionCache::default() }
    }
}

/// Turns characters into look-alike glyphs.
pub struct Translator<'a> {
    table: &'a GlyphTable,
    rng: fastrand::Rng,
}

impl<'a> Translator<'a> {
    pub fn new(table: &'a GlyphTable) -> Self {
        Self { table, rng: fastrand::Rng::new() }
    }

    /// Construct a translator whose draws are reproducible.
    pub fn with_seed(table: &'a GlyphTable, seed: u64) -> Self {
        Self { table, rng: fastrand::Rng::with_seed(seed) }
    }

    /// Translate a single character.
    ///
    /// Characters without an entry come back upper-cased and otherwise untouched.
    pub fn translate(&mut self, ch: char, config: &TranslatorConfig) -> String {
        let Some(glyphs) = self.table.lookup(ch) else {
            return ch.to_uppercase().collect();
        };
        if !config.randomize {
            if let Some(cached) = config.dictionary.get(ch) {
                return cached;
            }
        }

        let glyph = self.pick(glyphs).to_string();
        if !config.randomize {
            config.dictionary.insert(ch, glyph.clone());
        }
        glyph
    }

    /// Translate every character of `text` independently, keeping their order.
    pub fn translate_text(&mut self, text: &str, config: &TranslatorConfig) -> String {
        let mut output = String::with_capacity(text.len() * 3);
        for ch in text.chars() {
            output.push_str(&self.translate(ch, config));
        }
        output
    }

    fn pick(&mut self, glyphs: &'static [&'static str]) -> &'static str {
        if glyphs.is_empty() {
            return "";
        }
        glyphs[self.rng.usize(..glyphs.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn stable() -> TranslatorConfig {
        TranslatorConfig { randomize: false, dictionary: SessionCache::default() }
    }

    #[rstest]
    #[case::space(' ', " ")]
    #[case::tab('\t', "\t")]
    #[case::accented('é', "É")]
    #[case::sharp_s('ß', "SS")]
    fn identity_fallback(#[case] input: char, #[case] expected: &str) {
        let mut translator = Translator::new(GlyphTable::builtin());
        assert_eq!(translator.translate(input, &TranslatorConfig::default()), expected);
        assert_eq!(translator.translate(input, &stable()), expected);
    }

    #[test]
    fn fallback_does_not_touch_cache() {
        let mut translator = Translator::new(GlyphTable::builtin());
        let config = stable();
        translator.translate(' ', &config);
        assert!(config.dictionary.is_empty());
    }

    #[test]
    fn stable_mode_reuses_first_choice() {
        let mut translator = Translator::new(GlyphTable::builtin());
        let config = stable();
        let first = translator.translate('a', &config);
        assert_eq!(config.dictionary.get('A'), Some(first.clone()));
        for _ in 0..50 {
            assert_eq!(translator.translate('a', &config), first);
            assert_eq!(translator.translate('A', &config), first);
        }
        assert_eq!(config.dictionary.len(), 1);
    }

    #[test]
    fn stable_mode_uses_preseeded_choice() {
        let mut translator = Translator::new(GlyphTable::builtin());
        let config = TranslatorConfig { randomize: false, dictionary: SessionCache::seeded([('a', "@")]) };
        assert_eq!(translator.translate('A', &config), "@");
        assert_eq!(translator.translate('a', &config), "@");
    }

    #[test]
    fn random_mode_ignores_cache() {
        let mut translator = Translator::new(GlyphTable::builtin());
        let config = TranslatorConfig { randomize: true, dictionary: SessionCache::seeded([('a', "nope")]) };
        let candidates = GlyphTable::builtin().lookup('A').expect("missing entry");
        for _ in 0..200 {
            let glyph = translator.translate('a', &config);
            assert!(candidates.contains(&glyph.as_str()), "{glyph} is not a candidate");
        }
        assert_eq!(config.dictionary.get('A').as_deref(), Some("nope"));
    }

    #[test]
    fn random_mode_varies() {
        let mut translator = Translator::with_seed(GlyphTable::builtin(), 7);
        let config = TranslatorConfig::default();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(translator.translate('a', &config));
        }
        assert!(seen.len() > 1);
    }

    #[test]
    fn empty_candidates_strip() {
        let table = GlyphTable::from_entries(&[('#', &[])]);
        let mut translator = Translator::new(&table);
        assert_eq!(translator.translate('#', &TranslatorConfig::default()), "");
        let config = stable();
        assert_eq!(translator.translate('#', &config), "");
        assert_eq!(config.dictionary.get('#').as_deref(), Some(""));
    }

    #[test]
    fn seeded_translators_agree() {
        let config = TranslatorConfig::default();
        let mut left = Translator::with_seed(GlyphTable::builtin(), 42);
        let mut right = Translator::with_seed(GlyphTable::builtin(), 42);
        let text = "The quick brown fox, 1234!";
        assert_eq!(left.translate_text(text, &config), right.translate_text(text, &config));
    }

    #[test]
    fn text_is_translated_per_character() {
        let mut translator = Translator::new(GlyphTable::builtin());
        let config = stable();
        let output = translator.translate_text("aa b", &config);
        let a = config.dictionary.get('A').expect("a not cached");
        let b = config.dictionary.get('B').expect("b not cached");
        assert_eq!(output, format!("{a}{a} {b}"));
    }

    #[test]
    fn shared_cache_handles() {
        let shared = SessionCache::default();
        let left = TranslatorConfig { randomize: false, dictionary: shared.clone() };
        let right = TranslatorConfig { randomize: false, dictionary: shared.clone() };
        let mut translator = Translator::new(GlyphTable::builtin());
        let glyph = translator.translate('z', &left);
        assert_eq!(translator.translate('z', &right), glyph);
        assert_eq!(shared.snapshot().get(&'Z'), Some(&glyph));
    }
}
