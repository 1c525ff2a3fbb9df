//! # Line Layout
//!
//! Turns note content into display lines: greedy word-wrap against a maximum
//! width plus a one-line markdown classification (`# `, `## `, `- `).
//!
//! Layout is lazy. [`LineLayout`] is an iterator that computes one line per
//! `next()` call, so a renderer that only has room for twenty lines never looks
//! past them. Widths come from an injected [`MeasureText`], which keeps the
//! engine independent of fonts and terminals: the CLI measures in terminal
//! cells ([`CellWidth`]), a graphical client would measure in pixels.
//!
//! Lines are byte ranges into the source text; nothing is copied.
//!
//! ```text
//! "# Title\nsome body text"   (max width 10 cells)
//!
//! DisplayLine { start: 0, len: 7, kind: Heading1, next: 8 }    "# Title"
//! DisplayLine { start: 8, len: 9, kind: Plain, next: 18 }      "some body"
//! DisplayLine { start: 18, len: 4, kind: Plain, next: 22 }     "text"
//! ```

use crate::buffer::TextBuffer;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

/// Markdown role of a display line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Plain,
    Heading1,
    Heading2,
    Bullet,
}

impl LineKind {
    /// Only the first matching prefix counts; markers are never nested or escaped.
    pub fn classify(line: &str) -> Self {
        if line.starts_with("# ") {
            LineKind::Heading1
        } else if line.starts_with("## ") {
            LineKind::Heading2
        } else if line.starts_with("- ") {
            LineKind::Bullet
        } else {
            LineKind::Plain
        }
    }

    /// Bytes taken by the marker at the start of the line.
    pub fn marker_len(self) -> usize {
        match self {
            LineKind::Plain => 0,
            LineKind::Heading1 | LineKind::Bullet => 2,
            LineKind::Heading2 => 3,
        }
    }
}

/// One laid-out line: a byte range of the source plus its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayLine {
    pub start: usize,
    pub len: usize,
    pub kind: LineKind,
    /// Offset where the following line starts (past the separator).
    pub next: usize,
}

impl DisplayLine {
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.start + self.len]
    }

    /// The line without its markdown marker.
    pub fn body<'a>(&self, source: &'a str) -> &'a str {
        &self.text(source)[self.kind.marker_len()..]
    }
}

/// Measures the rendered width of a run of text.
pub trait MeasureText {
    fn measure(&self, text: &str) -> f32;
}

impl<F> MeasureText for F
where
    F: Fn(&str) -> f32,
{
    fn measure(&self, text: &str) -> f32 {
        self(text)
    }
}

/// Width in monospace terminal cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellWidth;

impl MeasureText for CellWidth {
    fn measure(&self, text: &str) -> f32 {
        text.width() as f32
    }
}

/// Lazy sequence of display lines over `text`.
pub struct LineLayout<'a, M> {
    text: &'a str,
    max_width: f32,
    measure: M,
    pos: usize,
    budget: Option<usize>,
}

impl<'a, M: MeasureText> LineLayout<'a, M> {
    pub fn new(text: &'a str, max_width: f32, measure: M) -> Self {
        Self {
            text,
            max_width,
            measure,
            pos: 0,
            budget: None,
        }
    }

    /// Stop after `lines` lines.
    pub fn with_line_budget(mut self, lines: usize) -> Self {
        self.budget = Some(lines);
        self
    }

    /// Stop once the lines emitted so far cover `height`.
    ///
    /// A line starting above `height` is still emitted, matching a renderer that
    /// draws while its cursor is inside the area.
    pub fn with_height_budget(self, height: f32, line_height: f32) -> Self {
        let lines = if line_height > 0.0 && height > 0.0 {
            (height / line_height).ceil() as usize
        } else {
            0
        };
        self.with_line_budget(lines)
    }

    /// Byte offset layout will resume from.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns (line length, start of the following line) for a line at `start`.
    fn break_line(&self, start: usize) -> (usize, usize) {
        let rest = &self.text[start..];
        let mut len = 0;
        let mut last_space = None;

        for (offset, ch) in rest.char_indices() {
            if ch == '\n' {
                break;
            }
            // A space in the first column is never a break point, so every line
            // holds at least one character.
            if ch == ' ' && offset > 0 {
                last_space = Some(offset);
            }
            let end = offset + ch.len_utf8();
            if let Some(space) = last_space
                && self.measure.measure(&rest[..end]) > self.max_width
            {
                len = space;
                break;
            }
            len = end;
        }

        let next = match rest.as_bytes().get(len) {
            Some(b'\n') | Some(b' ') => start + len + 1,
            _ => start + len,
        };
        (len, next)
    }
}

impl<M: MeasureText> Iterator for LineLayout<'_, M> {
    type Item = DisplayLine;

    fn next(&mut self) -> Option<DisplayLine> {
        if self.pos >= self.text.len() {
            return None;
        }
        if let Some(budget) = self.budget.as_mut() {
            if *budget == 0 {
                return None;
            }
            *budget -= 1;
        }

        let start = self.pos;
        let (len, next) = self.break_line(start);
        let kind = LineKind::classify(&self.text[start..start + len]);
        self.pos = next;

        Some(DisplayLine {
            start,
            len,
            kind,
            next,
        })
    }
}

/// Memoized layout for a single buffer.
///
/// Lines are recomputed only when the buffer revision or the width changes.
/// Keep one cache per buffer: the key does not identify the buffer itself.
#[derive(Debug, Default)]
pub struct LayoutCache {
    key: Option<(u64, u32)>,
    lines: Vec<DisplayLine>,
    computed: usize,
}

impl LayoutCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines<M: MeasureText>(
        &mut self,
        buffer: &TextBuffer,
        max_width: f32,
        measure: M,
    ) -> &[DisplayLine] {
        let key = (buffer.revision(), max_width.to_bits());
        if self.key != Some(key) {
            self.lines = LineLayout::new(buffer.as_str(), max_width, measure).collect();
            self.key = Some(key);
            self.computed += 1;
        }
        &self.lines
    }

    /// How many times layout actually ran.
    pub fn computed(&self) -> usize {
        self.computed
    }

    pub fn invalidate(&mut self) {
        self.key = None;
    }
}
