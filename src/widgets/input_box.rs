use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Widget},
};
use unicode_width::UnicodeWidthChar;

use crate::ui::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM};

/// Shown in place of a line break on the single input row.
const LINE_BREAK_GLYPH: char = '⏎';

/// The cell a character occupies on the input row, and its width.
fn display_char(c: char) -> (char, usize) {
    match c {
        '\n' => (LINE_BREAK_GLYPH, 1),
        '\t' => (' ', 1),
        _ => (c, c.width().unwrap_or(0)),
    }
}

/// Single-line text buffer with a cursor.
///
/// The cursor is a character index, not a byte offset, so Devanagari and
/// emoji input edit correctly. Pasted line breaks and tabs are kept in the
/// content; the row shows a line break as `⏎`.
#[derive(Debug, Clone, Default)]
pub struct InputBox {
    content: String,
    /// Cursor position in characters
    cursor: usize,
}

impl InputBox {
    pub fn new() -> Self {
        Self::default()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Insert a character at the cursor.
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Insert a string at the cursor (bracketed paste).
    ///
    /// CRLF and lone CR become `\n`; control characters other than line
    /// breaks and tabs are dropped.
    pub fn insert_str(&mut self, s: &str) {
        let normalized = s.replace("\r\n", "\n").replace('\r', "\n");
        for c in normalized
            .chars()
            .filter(|c| matches!(*c, '\n' | '\t') || !c.is_control())
        {
            self.insert_char(c);
        }
    }

    /// Delete the character under the cursor.
    pub fn delete_char(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.char_len();
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Cursor position in characters.
    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    /// Replace the content and put the cursor at the end.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.char_len();
    }

    /// Take the content out, leaving the box empty.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.content)
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// True if the content is empty after trimming whitespace.
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// First visible character so the cursor fits in `width` columns.
    fn scroll_offset(&self, width: usize) -> usize {
        let mut used = 1; // the cursor cell
        let mut start = self.cursor;
        for c in self.content.chars().take(self.cursor).collect::<Vec<_>>().iter().rev() {
            let (_, w) = display_char(*c);
            if used + w > width {
                break;
            }
            used += w;
            start -= 1;
        }
        start
    }

    /// Render inside a bordered block. Shows `placeholder` dimmed when empty.
    pub fn render_with_title(
        &self,
        area: Rect,
        buf: &mut Buffer,
        title: &str,
        placeholder: &str,
        focused: bool,
    ) {
        let border_color = if focused { COLOR_ACCENT } else { COLOR_BORDER };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .title(title.to_string());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }
        let width = inner.width as usize;

        if self.content.is_empty() {
            buf.set_stringn(
                inner.x,
                inner.y,
                placeholder,
                width,
                Style::default().fg(COLOR_DIM),
            );
        }

        let offset = self.scroll_offset(width);
        let mut x = inner.x;
        let right = inner.x + inner.width;
        let mut cursor_x = None;
        for (i, c) in self.content.chars().enumerate().skip(offset) {
            let (glyph, w) = display_char(c);
            let w = w as u16;
            if x + w.max(1) > right {
                break;
            }
            if i == self.cursor {
                cursor_x = Some(x);
            }
            let style = if c == '\n' {
                Style::default().fg(COLOR_DIM)
            } else {
                Style::default().fg(Color::White)
            };
            buf.set_string(x, inner.y, glyph.to_string(), style);
            x += w;
        }
        if self.cursor >= self.char_len() && x < right {
            cursor_x = Some(x);
        }

        if focused {
            if let Some(cx) = cursor_x {
                let cell_style = Style::default().fg(Color::Black).bg(COLOR_ACCENT);
                let under = self
                    .content
                    .chars()
                    .nth(self.cursor)
                    .map_or(' ', |c| display_char(c).0);
                buf.set_string(cx, inner.y, under.to_string(), cell_style);
            }
        }
    }
}

/// Widget wrapper so an [`InputBox`] can be passed to `Frame::render_widget`.
pub struct InputBoxWidget<'a> {
    input_box: &'a InputBox,
    title: &'a str,
    placeholder: &'a str,
    focused: bool,
}

impl<'a> InputBoxWidget<'a> {
    pub fn new(input_box: &'a InputBox, title: &'a str, placeholder: &'a str, focused: bool) -> Self {
        Self {
            input_box,
            title,
            placeholder,
            focused,
        }
    }
}

impl Widget for InputBoxWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.input_box
            .render_with_title(area, buf, self.title, self.placeholder, self.focused);
    }
}
