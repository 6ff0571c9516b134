//! Translate typed and pasted text into glitchy Unicode look-alikes.
//!
//! The [glyphs] table maps every supported character to its look-alikes, a
//! [translate::Translator] picks one of them, and the [intercept] module rewrites keystrokes and
//! pastes on a text surface as they happen.

pub mod config;
pub mod editor;
pub mod glyphs;
pub mod intercept;
pub mod logging;
pub mod translate;
