use super::PasteEvent;
use serde::Deserialize;

/// Where pasted text can be read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, strum::Display, strum::EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ClipboardSource {
    /// The text delivered with the paste event itself.
    Event,

    /// The operating system clipboard.
    System,
}

/// A source of plain text for paste handling.
pub trait ClipboardAccessor {
    fn name(&self) -> &'static str;

    /// Read the pasted text, or `None` if this accessor has nothing to offer.
    fn read_plain_text(&mut self, paste: &PasteEvent) -> Option<String>;
}

/// Reads the payload carried by the paste event, e.g. a terminal bracketed paste.
pub struct EventPayload;

impl ClipboardAccessor for EventPayload {
    fn name(&self) -> &'static str {
        "event"
    }

    fn read_plain_text(&mut self, paste: &PasteEvent) -> Option<String> {
        paste.payload.clone()
    }
}

/// Reads the operating system clipboard.
pub struct SystemClipboard;

impl ClipboardAccessor for SystemClipboard {
    fn name(&self) -> &'static str {
        "system"
    }

    fn read_plain_text(&mut self, _paste: &PasteEvent) -> Option<String> {
        let mut clipboard = match arboard::Clipboard::new() {
            Ok(clipboard) => clipboard,
            Err(e) => {
                log::debug!("system clipboard unavailable: {e}");
                return None;
            }
        };
        match clipboard.get_text() {
            Ok(text) => Some(text),
            Err(e) => {
                log::debug!("failed to read system clipboard: {e}");
                None
            }
        }
    }
}

/// Get the accessor implementation for a given source
pub fn get_accessor(source: ClipboardSource) -> Box<dyn ClipboardAccessor> {
    match source {
        ClipboardSource::Event => Box::new(EventPayload),
        ClipboardSource::System => Box::new(SystemClipboard),
    }
}

/// Accessors tried in order; the first one that yields text wins.
pub struct ClipboardChain {
    accessors: Vec<Box<dyn ClipboardAccessor>>,
}

impl ClipboardChain {
    pub fn new(accessors: Vec<Box<dyn ClipboardAccessor>>) -> Self {
        Self { accessors }
    }

    pub fn from_sources(sources: &[ClipboardSource]) -> Self {
        Self::new(sources.iter().copied().map(get_accessor).collect())
    }

    /// Read pasted text, degrading to an empty string when no accessor has any.
    pub fn read(&mut self, paste: &PasteEvent) -> String {
        for accessor in &mut self.accessors {
            if let Some(text) = accessor.read_plain_text(paste) {
                log::trace!("read {} bytes of pasted text from {}", text.len(), accessor.name());
                return text;
            }
        }
        log::debug!("no clipboard accessor had text to paste");
        String::new()
    }
}

impl Default for ClipboardChain {
    fn default() -> Self {
        Self::from_sources(&[ClipboardSource::Event, ClipboardSource::System])
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::str::FromStr;

    /// Accessor returning a fixed value.
    pub struct Fixed(pub Option<&'static str>);

    impl ClipboardAccessor for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn read_plain_text(&mut self, _paste: &PasteEvent) -> Option<String> {
            self.0.map(String::from)
        }
    }

    #[test]
    fn first_available_wins() {
        let mut chain = ClipboardChain::new(vec![
            Box::new(Fixed(None)),
            Box::new(Fixed(Some("second"))),
            Box::new(Fixed(Some("third"))),
        ]);
        assert_eq!(chain.read(&PasteEvent::empty()), "second");
    }

    #[test]
    fn event_payload_before_fallback() {
        let mut chain = ClipboardChain::new(vec![Box::new(EventPayload), Box::new(Fixed(Some("fallback")))]);
        assert_eq!(chain.read(&PasteEvent::with_text("payload")), "payload");
        assert_eq!(chain.read(&PasteEvent::empty()), "fallback");
    }

    #[test]
    fn nothing_available() {
        let mut chain = ClipboardChain::new(vec![Box::new(EventPayload)]);
        assert_eq!(chain.read(&PasteEvent::empty()), "");
        let mut empty = ClipboardChain::new(Vec::new());
        assert_eq!(empty.read(&PasteEvent::with_text("ignored")), "");
    }

    #[test]
    fn source_names() {
        assert_eq!(ClipboardSource::from_str("system").ok(), Some(ClipboardSource::System));
        assert_eq!(ClipboardSource::Event.to_string(), "event");
        assert_eq!(get_accessor(ClipboardSource::System).name(), "system");
    }
}
