mod clipboard;
pub mod terminal;

pub use clipboard::{ClipboardAccessor, ClipboardChain, ClipboardSource, EventPayload};

use crate::glyphs::GlyphTable;
use crate::translate::{SessionCache, Translator, TranslatorConfig};

/// Character code of the backspace key.
pub const BACKSPACE: u32 = 8;

/// Codes that keep their default behavior unless configured otherwise.
pub const DEFAULT_SKIP_CODES: &[u32] = &[BACKSPACE];

/// Who produced an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    /// A person typing or pasting.
    User,

    /// Something generated programmatically, such as a replay of our own insertions.
    Synthetic,
}

/// A keystroke that would insert the character with the given code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPress {
    pub code: u32,
    pub origin: Origin,
}

impl KeyPress {
    pub fn user(ch: char) -> Self {
        Self { code: ch as u32, origin: Origin::User }
    }

    pub fn code(code: u32) -> Self {
        Self { code, origin: Origin::User }
    }

    pub fn synthetic(ch: char) -> Self {
        Self { code: ch as u32, origin: Origin::Synthetic }
    }

    /// The character this keystroke would insert, if the code is a valid one.
    pub fn as_char(&self) -> Option<char> {
        char::from_u32(self.code)
    }
}

/// A paste request, optionally carrying the pasted text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PasteEvent {
    pub payload: Option<String>,
}

impl PasteEvent {
    pub fn with_text<S: Into<String>>(text: S) -> Self {
        Self { payload: Some(text.into()) }
    }

    /// A paste whose text has to be fetched from elsewhere.
    pub fn empty() -> Self {
        Self { payload: None }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurfaceEvent {
    KeyPress(KeyPress),
    Paste(PasteEvent),
}

/// What the host should do with an event after it was intercepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disposition {
    /// Let the host apply its default behavior.
    Default,

    /// The interceptor already edited the surface; skip the default behavior.
    Suppressed,
}

/// Something text can be typed into.
pub trait TextSurface {
    /// Insert text at the caret, leaving the caret after it.
    fn insert_at_caret(&mut self, text: &str);
}

/// Settings shared by every surface an interceptor is activated on.
#[derive(Debug, Clone)]
pub struct Options {
    /// Draw a fresh glyph every time instead of keeping one per character.
    pub randomize: bool,

    /// A dictionary shared by all activations. Each activation gets its own when unset.
    pub dictionary: Option<SessionCache>,

    /// Key codes that are never translated.
    pub skip_codes: Vec<u32>,

    /// Seed for reproducible output.
    pub seed: Option<u64>,

    /// Where pasted text is read from, in order.
    pub clipboard: Vec<ClipboardSource>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            randomize: true,
            dictionary: None,
            skip_codes: DEFAULT_SKIP_CODES.to_vec(),
            seed: None,
            clipboard: vec![ClipboardSource::Event, ClipboardSource::System],
        }
    }
}

impl Options {
    /// The translator configuration for a fresh activation.
    pub fn translator_config(&self) -> TranslatorConfig {
        TranslatorConfig { randomize: self.randomize, dictionary: self.dictionary.clone().unwrap_or_default() }
    }

    /// Build the translator for the activation at `index`.
    ///
    /// Seeded activations each get their own seed so that two surfaces don't mirror each other.
    pub fn translator<'a>(&self, table: &'a GlyphTable, index: usize) -> Translator<'a> {
        match self.seed {
            Some(seed) => Translator::with_seed(table, seed.wrapping_add(index as u64)),
            None => Translator::new(table),
        }
    }
}

/// Rewrites keystrokes and pastes into glyphs.
pub struct Interceptor<'a> {
    translator: Translator<'a>,
    config: TranslatorConfig,
    skip_codes: Vec<u32>,
    clipboard: ClipboardChain,
}

impl<'a> Interceptor<'a> {
    pub fn new(
        translator: Translator<'a>,
        config: TranslatorConfig,
        skip_codes: Vec<u32>,
        clipboard: ClipboardChain,
    ) -> Self {
        Self { translator, config, skip_codes, clipboard }
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    pub fn handle<S: TextSurface + ?Sized>(&mut self, event: &SurfaceEvent, surface: &mut S) -> Disposition {
        match event {
            SurfaceEvent::KeyPress(key) => self.handle_keypress(key, surface),
            SurfaceEvent::Paste(paste) => self.handle_paste(paste, surface),
        }
    }

    /// Replace a typed character with its glyph.
    pub fn handle_keypress<S: TextSurface + ?Sized>(&mut self, key: &KeyPress, surface: &mut S) -> Disposition {
        // Our own insertions may come back as synthetic events; those must go through as-is.
        if key.origin != Origin::User || self.skip_codes.contains(&key.code) {
            return Disposition::Default;
        }
        let Some(ch) = key.as_char() else {
            log::debug!("ignoring keystroke with invalid code {:#x}", key.code);
            return Disposition::Default;
        };
        let glyph = self.translator.translate(ch, &self.config);
        log::trace!("translated {ch:?} into {glyph:?}");
        surface.insert_at_caret(&glyph);
        Disposition::Suppressed
    }

    /// Replace pasted text with its translation, one character at a time.
    pub fn handle_paste<S: TextSurface + ?Sized>(&mut self, paste: &PasteEvent, surface: &mut S) -> Disposition {
        let text = self.clipboard.read(paste);
        let translated = self.translator.translate_text(&text, &self.config);
        log::debug!("pasted {} characters", text.chars().count());
        surface.insert_at_caret(&translated);
        Disposition::Suppressed
    }
}

/// An interceptor bound to the surface it was activated on.
///
/// Dropping the activation, or taking the surface back with [Activation::into_surface],
/// deactivates it and discards its session cache.
pub struct Activation<'a, S> {
    surface: S,
    interceptor: Interceptor<'a>,
}

impl<'a, S: TextSurface> Activation<'a, S> {
    pub fn new(surface: S, interceptor: Interceptor<'a>) -> Self {
        Self { surface, interceptor }
    }

    /// Route an event to the interceptor.
    pub fn dispatch(&mut self, event: &SurfaceEvent) -> Disposition {
        self.interceptor.handle(event, &mut self.surface)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn config(&self) -> &TranslatorConfig {
        self.interceptor.config()
    }

    pub fn dictionary(&self) -> &SessionCache {
        &self.interceptor.config().dictionary
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}

/// Activate glyph translation on every given surface.
pub fn activate<'a, S, I>(surfaces: I, table: &'a GlyphTable, options: &Options) -> Vec<Activation<'a, S>>
where
    S: TextSurface,
    I: IntoIterator<Item = S>,
{
    surfaces
        .into_iter()
        .enumerate()
        .map(|(index, surface)| {
            let interceptor = Interceptor::new(
                options.translator(table, index),
                options.translator_config(),
                options.skip_codes.clone(),
                ClipboardChain::from_sources(&options.clipboard),
            );
            Activation::new(surface, interceptor)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::clipboard::tests::Fixed;
    use super::*;
    use rstest::rstest;

    #[derive(Debug, Default)]
    struct Recorder {
        text: String,
        inserts: usize,
    }

    impl TextSurface for Recorder {
        fn insert_at_caret(&mut self, text: &str) {
            self.text.push_str(text);
            self.inserts += 1;
        }
    }

    fn interceptor(options: &Options) -> Interceptor<'static> {
        Interceptor::new(
            options.translator(GlyphTable::builtin(), 0),
            options.translator_config(),
            options.skip_codes.clone(),
            ClipboardChain::new(vec![Box::new(EventPayload), Box::new(Fixed(None))]),
        )
    }

    fn stable() -> Options {
        Options { randomize: false, ..Default::default() }
    }

    fn candidates(ch: char) -> &'static [&'static str] {
        GlyphTable::builtin().lookup(ch).expect("missing entry")
    }

    #[test]
    fn keypress_is_translated() {
        let mut interceptor = interceptor(&Options::default());
        let mut surface = Recorder::default();
        let disposition = interceptor.handle_keypress(&KeyPress::user('k'), &mut surface);
        assert_eq!(disposition, Disposition::Suppressed);
        assert!(candidates('K').contains(&surface.text.as_str()));
    }

    #[test]
    fn backspace_passes_through() {
        let mut interceptor = interceptor(&stable());
        let mut surface = Recorder::default();
        let disposition = interceptor.handle_keypress(&KeyPress::code(BACKSPACE), &mut surface);
        assert_eq!(disposition, Disposition::Default);
        assert_eq!(surface.inserts, 0);
        assert!(interceptor.config().dictionary.is_empty());
    }

    #[test]
    fn configured_skip_codes() {
        let options = Options { skip_codes: vec!['x' as u32], ..Default::default() };
        let mut interceptor = interceptor(&options);
        let mut surface = Recorder::default();
        assert_eq!(interceptor.handle_keypress(&KeyPress::user('x'), &mut surface), Disposition::Default);
        assert_eq!(interceptor.handle_keypress(&KeyPress::code(BACKSPACE), &mut surface), Disposition::Suppressed);
    }

    #[test]
    fn synthetic_keypress_is_ignored() {
        let mut interceptor = interceptor(&stable());
        let mut surface = Recorder::default();
        let disposition = interceptor.handle_keypress(&KeyPress::synthetic('a'), &mut surface);
        assert_eq!(disposition, Disposition::Default);
        assert_eq!(surface.inserts, 0);
        assert!(interceptor.config().dictionary.is_empty());
    }

    #[test]
    fn invalid_code_passes_through() {
        let mut interceptor = interceptor(&Options::default());
        let mut surface = Recorder::default();
        assert_eq!(interceptor.handle_keypress(&KeyPress::code(0xD800), &mut surface), Disposition::Default);
    }

    #[test]
    fn paste_is_translated_per_character() {
        let mut interceptor = interceptor(&stable());
        let mut surface = Recorder::default();
        let disposition = interceptor.handle_paste(&PasteEvent::with_text("Hi!"), &mut surface);
        assert_eq!(disposition, Disposition::Suppressed);
        assert_eq!(surface.inserts, 1);

        let dictionary = &interceptor.config().dictionary;
        let parts: Vec<String> = ['H', 'I', '!'].iter().map(|ch| dictionary.get(*ch).expect("not cached")).collect();
        for (part, ch) in parts.iter().zip(['H', 'I', '!']) {
            assert!(candidates(ch).contains(&part.as_str()), "{part} is not a candidate for {ch}");
        }
        assert_eq!(surface.text, parts.concat());
    }

    #[test]
    fn repeated_paste_characters_agree() {
        let mut interceptor = interceptor(&stable());
        let mut surface = Recorder::default();
        interceptor.handle_paste(&PasteEvent::with_text("aa"), &mut surface);
        let glyph = interceptor.config().dictionary.get('a').expect("not cached");
        assert_eq!(surface.text, format!("{glyph}{glyph}"));
    }

    #[test]
    fn paste_without_text_inserts_nothing() {
        let mut interceptor = interceptor(&Options::default());
        let mut surface = Recorder::default();
        let disposition = interceptor.handle_paste(&PasteEvent::empty(), &mut surface);
        assert_eq!(disposition, Disposition::Suppressed);
        assert_eq!(surface.text, "");
    }

    #[rstest]
    #[case::key(SurfaceEvent::KeyPress(KeyPress::user('m')))]
    #[case::paste(SurfaceEvent::Paste(PasteEvent::with_text("m")))]
    fn typed_and_pasted_share_cache(#[case] event: SurfaceEvent) {
        let dictionary = SessionCache::seeded([('M', "ℳ")]);
        let options = Options { randomize: false, dictionary: Some(dictionary), ..Default::default() };
        let mut interceptor = interceptor(&options);
        let mut surface = Recorder::default();
        interceptor.handle(&event, &mut surface);
        assert_eq!(surface.text, "ℳ");
    }

    #[test]
    fn activations_have_their_own_cache() {
        let mut activations = activate([Recorder::default(), Recorder::default()], GlyphTable::builtin(), &stable());
        for activation in &mut activations {
            activation.dispatch(&SurfaceEvent::KeyPress(KeyPress::user('e')));
        }
        assert_eq!(activations[0].dictionary().len(), 1);
        assert_eq!(activations[1].dictionary().len(), 1);

        activations[0].dictionary().insert('q', "ℚ");
        assert_eq!(activations[1].dictionary().get('q'), None);
    }

    #[test]
    fn shared_dictionary_is_shared() {
        let shared = SessionCache::default();
        let options = Options { randomize: false, dictionary: Some(shared.clone()), seed: Some(3), ..Default::default() };
        let mut activations = activate([Recorder::default(), Recorder::default()], GlyphTable::builtin(), &options);
        activations[0].dispatch(&SurfaceEvent::KeyPress(KeyPress::user('w')));
        activations[1].dispatch(&SurfaceEvent::KeyPress(KeyPress::user('W')));

        let first = activations.remove(0).into_surface();
        let second = activations.remove(0).into_surface();
        assert_eq!(first.text, second.text);
        assert_eq!(shared.get('w'), Some(first.text));
    }

    #[test]
    fn surface_is_reachable() {
        let mut activations = activate([Recorder::default()], GlyphTable::builtin(), &Options::default());
        let activation = &mut activations[0];
        activation.surface_mut().insert_at_caret("x");
        assert_eq!(activation.surface().text, "x");
    }
}
