use crate::intercept::terminal::{EditAction, TerminalAction, classify};
use crate::intercept::{Activation, BACKSPACE, Disposition, SurfaceEvent, TextSurface};
use crossterm::cursor::MoveTo;
use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

/// Multi-line text with a caret.
///
/// The caret is a byte offset that always sits on a char boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    caret: usize,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Apply the default behavior of an event the interceptor let through.
    pub fn apply_default(&mut self, event: &SurfaceEvent) {
        match event {
            SurfaceEvent::KeyPress(key) if key.code == BACKSPACE => self.delete_backward(),
            SurfaceEvent::KeyPress(key) => {
                if let Some(ch) = key.as_char() {
                    self.insert_at_caret(ch.encode_utf8(&mut [0; 4]));
                }
            }
            SurfaceEvent::Paste(paste) => {
                if let Some(text) = &paste.payload {
                    self.insert_at_caret(text);
                }
            }
        }
    }

    pub fn apply(&mut self, action: EditAction) {
        match action {
            EditAction::Newline => self.insert_at_caret("\n"),
            EditAction::DeleteForward => self.delete_forward(),
            EditAction::Left => self.caret = self.previous_boundary(),
            EditAction::Right => self.caret = self.next_boundary(),
            EditAction::Home => self.caret = self.line_start(),
            EditAction::End => self.caret = self.line_end(),
        }
    }

    pub fn delete_backward(&mut self) {
        let start = self.previous_boundary();
        self.text.replace_range(start..self.caret, "");
        self.caret = start;
    }

    pub fn delete_forward(&mut self) {
        let end = self.next_boundary();
        self.text.replace_range(self.caret..end, "");
    }

    /// The caret's row and display column.
    pub fn caret_position(&self) -> (usize, usize) {
        let before = &self.text[..self.caret];
        let row = before.matches('\n').count();
        let column = before[self.line_start()..].width();
        (row, column)
    }

    fn previous_boundary(&self) -> usize {
        self.text[..self.caret].char_indices().next_back().map(|(index, _)| index).unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.text[self.caret..].chars().next().map(|ch| self.caret + ch.len_utf8()).unwrap_or(self.caret)
    }

    fn line_start(&self) -> usize {
        self.text[..self.caret].rfind('\n').map(|index| index + 1).unwrap_or(0)
    }

    fn line_end(&self) -> usize {
        self.text[self.caret..].find('\n').map(|index| self.caret + index).unwrap_or(self.text.len())
    }
}

impl TextSurface for TextBuffer {
    fn insert_at_caret(&mut self, text: &str) {
        self.text.insert_str(self.caret, text);
        self.caret += text.len();
    }
}

/// Route one classified terminal event. Returns `false` once the user asked to quit.
pub fn handle_action(activation: &mut Activation<'_, TextBuffer>, action: TerminalAction) -> bool {
    match action {
        TerminalAction::Intercept(event) => {
            if activation.dispatch(&event) == Disposition::Default {
                activation.surface_mut().apply_default(&event);
            }
        }
        TerminalAction::Edit(action) => activation.surface_mut().apply(action),
        TerminalAction::Quit => return false,
        TerminalAction::Redraw | TerminalAction::Ignore => {}
    }
    true
}

/// Run the interactive editor until the user quits, returning the typed text.
pub fn run(mut activation: Activation<'_, TextBuffer>) -> io::Result<String> {
    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableBracketedPaste) {
        restore(&mut stdout);
        return Err(e);
    }
    log::info!("editor started");

    let result = event_loop(&mut activation, &mut stdout);
    restore(&mut stdout);
    result?;

    log::info!("editor finished with {} glyphs remembered", activation.dictionary().len());
    Ok(activation.into_surface().into_text())
}

fn event_loop<W: Write>(activation: &mut Activation<'_, TextBuffer>, out: &mut W) -> io::Result<()> {
    loop {
        draw(activation, out)?;
        if !handle_action(activation, classify(event::read()?)) {
            return Ok(());
        }
    }
}

fn restore<W: Write>(out: &mut W) {
    if let Err(e) = execute!(out, DisableBracketedPaste, LeaveAlternateScreen) {
        log::warn!("failed to leave alternate screen: {e}");
    }
    if let Err(e) = terminal::disable_raw_mode() {
        log::warn!("failed to disable raw mode: {e}");
    }
}

fn status_line(activation: &Activation<'_, TextBuffer>) -> String {
    let config = activation.config();
    let mode = if config.randomize {
        "random".to_string()
    } else {
        format!("stable, {} remembered", config.dictionary.len())
    };
    format!(" witchify ({mode}) | Esc to finish | Ctrl+V pastes from the clipboard ")
}

fn draw<W: Write>(activation: &Activation<'_, TextBuffer>, out: &mut W) -> io::Result<()> {
    let (columns, rows) = terminal::size()?;
    let buffer = activation.surface();

    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    for line in buffer.text().split('\n') {
        queue!(out, Print(line), Print("\r\n"))?;
    }

    let status: String = status_line(activation).chars().take(columns as usize).collect();
    queue!(
        out,
        MoveTo(0, rows.saturating_sub(1)),
        SetAttribute(Attribute::Reverse),
        Print(status),
        SetAttribute(Attribute::Reset)
    )?;

    let (row, column) = buffer.caret_position();
    let row = u16::try_from(row).unwrap_or(u16::MAX);
    let column = u16::try_from(column).unwrap_or(u16::MAX);
    queue!(out, MoveTo(column, row))?;
    out.flush()
}
