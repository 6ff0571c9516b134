use super::{BACKSPACE, KeyPress, PasteEvent, SurfaceEvent};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Editing keys the terminal editor handles on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditAction {
    Newline,
    DeleteForward,
    Left,
    Right,
    Home,
    End,
}

/// What a terminal event means for the editor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TerminalAction {
    /// Hand the event to the interceptor.
    Intercept(SurfaceEvent),
    Edit(EditAction),
    Quit,
    Redraw,
    Ignore,
}

/// Classify a terminal event.
pub fn classify(event: Event) -> TerminalAction {
    match event {
        Event::Key(key) => classify_key(key),
        Event::Paste(text) => TerminalAction::Intercept(SurfaceEvent::Paste(PasteEvent::with_text(text))),
        Event::Resize(..) => TerminalAction::Redraw,
        _ => TerminalAction::Ignore,
    }
}

fn classify_key(key: KeyEvent) -> TerminalAction {
    if key.kind == KeyEventKind::Release {
        return TerminalAction::Ignore;
    }
    let control = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    match key.code {
        KeyCode::Esc => TerminalAction::Quit,
        KeyCode::Char('c' | 'd') if control => TerminalAction::Quit,
        // Terminals without bracketed paste hand us the shortcut, so the text has to come
        // from the clipboard.
        KeyCode::Char('v') if control => TerminalAction::Intercept(SurfaceEvent::Paste(PasteEvent::empty())),
        KeyCode::Char(c) if !control && !alt => TerminalAction::Intercept(SurfaceEvent::KeyPress(KeyPress::user(c))),
        KeyCode::Backspace => TerminalAction::Intercept(SurfaceEvent::KeyPress(KeyPress::code(BACKSPACE))),
        KeyCode::Enter => TerminalAction::Edit(EditAction::Newline),
        KeyCode::Delete => TerminalAction::Edit(EditAction::DeleteForward),
        KeyCode::Left => TerminalAction::Edit(EditAction::Left),
        KeyCode::Right => TerminalAction::Edit(EditAction::Right),
        KeyCode::Home => TerminalAction::Edit(EditAction::Home),
        KeyCode::End => TerminalAction::Edit(EditAction::End),
        _ => TerminalAction::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use rstest::rstest;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[rstest]
    #[case::letter(KeyCode::Char('a'), KeyModifiers::NONE, TerminalAction::Intercept(SurfaceEvent::KeyPress(KeyPress::user('a'))))]
    #[case::shifted(KeyCode::Char('A'), KeyModifiers::SHIFT, TerminalAction::Intercept(SurfaceEvent::KeyPress(KeyPress::user('A'))))]
    #[case::backspace(KeyCode::Backspace, KeyModifiers::NONE, TerminalAction::Intercept(SurfaceEvent::KeyPress(KeyPress::code(8))))]
    #[case::paste_shortcut(KeyCode::Char('v'), KeyModifiers::CONTROL, TerminalAction::Intercept(SurfaceEvent::Paste(PasteEvent::empty())))]
    #[case::enter(KeyCode::Enter, KeyModifiers::NONE, TerminalAction::Edit(EditAction::Newline))]
    #[case::left(KeyCode::Left, KeyModifiers::NONE, TerminalAction::Edit(EditAction::Left))]
    #[case::escape(KeyCode::Esc, KeyModifiers::NONE, TerminalAction::Quit)]
    #[case::interrupt(KeyCode::Char('c'), KeyModifiers::CONTROL, TerminalAction::Quit)]
    #[case::alt_letter(KeyCode::Char('x'), KeyModifiers::ALT, TerminalAction::Ignore)]
    #[case::function(KeyCode::F(1), KeyModifiers::NONE, TerminalAction::Ignore)]
    fn keys(#[case] code: KeyCode, #[case] modifiers: KeyModifiers, #[case] expected: TerminalAction) {
        assert_eq!(classify(key(code, modifiers)), expected);
    }

    #[test]
    fn bracketed_paste() {
        let action = classify(Event::Paste("Hi!".into()));
        assert_eq!(action, TerminalAction::Intercept(SurfaceEvent::Paste(PasteEvent::with_text("Hi!"))));
    }

    #[test]
    fn releases_are_ignored() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(classify(Event::Key(release)), TerminalAction::Ignore);
    }

    #[test]
    fn resize_redraws() {
        assert_eq!(classify(Event::Resize(80, 24)), TerminalAction::Redraw);
    }
}
