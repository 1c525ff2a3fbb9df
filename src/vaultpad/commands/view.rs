use crate::commands::helpers::require_note;
use crate::commands::{CmdResult, NoteView, RenderedLine};
use crate::error::Result;
use crate::layout::{LineLayout, MeasureText};
use crate::notebook::Notebook;
use crate::store::VaultBackend;

/// Lay out a note for display and select it.
///
/// `max_width` is in the unit of `measure`. With `max_lines`, layout stops
/// after that many lines and the view is marked truncated when text remains.
pub fn run<B: VaultBackend, M: MeasureText>(
    notebook: &mut Notebook<B>,
    index: usize,
    max_width: f32,
    measure: M,
    max_lines: Option<usize>,
) -> Result<CmdResult> {
    let index = require_note(notebook, index)?;
    notebook.select(index);
    let note = &notebook.notes()[index];
    let text = note.text();

    let mut layout = LineLayout::new(text, max_width, measure);
    if let Some(lines) = max_lines {
        layout = layout.with_line_budget(lines);
    }
    let mut lines = Vec::new();
    for line in layout.by_ref() {
        lines.push(RenderedLine {
            kind: line.kind,
            text: line.body(text).to_string(),
        });
    }
    let truncated = layout.position() < text.len();

    let view = NoteView {
        title: note.title().to_string(),
        dirty: note.is_dirty(),
        stats: note.stats(),
        lines,
        truncated,
    };
    let mut result = CmdResult::default();
    if let Some(summary) = notebook.summary(index) {
        result.affected_notes.push(summary);
    }
    result.view = Some(view);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{CellWidth, LineKind};
    use crate::notebook::NotebookLimits;
    use crate::store::memory::MemBackend;

    fn notebook(text: &str) -> Notebook<MemBackend> {
        Notebook::open(
            MemBackend::new().with_note("other", "").with_note("n", text),
            NotebookLimits::default(),
        )
        .unwrap()
    }

    #[test]
    fn renders_headings_bullets_and_wrapped_text() {
        let mut nb = notebook("# Plan\n## Today\n- write tests\nsome plain words here");
        let result = run(&mut nb, 1, 13.0, CellWidth, None).unwrap();
        let view = result.view.unwrap();
        assert_eq!(view.title, "n");
        assert!(!view.truncated);
        assert_eq!(
            view.lines,
            vec![
                RenderedLine { kind: LineKind::Heading1, text: "Plan".into() },
                RenderedLine { kind: LineKind::Heading2, text: "Today".into() },
                RenderedLine { kind: LineKind::Bullet, text: "write tests".into() },
                RenderedLine { kind: LineKind::Plain, text: "some plain".into() },
                RenderedLine { kind: LineKind::Plain, text: "words here".into() },
            ]
        );
        assert_eq!(nb.selected(), Some(1));
    }

    #[test]
    fn line_budget_marks_truncation() {
        let mut nb = notebook("one\ntwo\nthree");
        let view = run(&mut nb, 1, 80.0, CellWidth, Some(2)).unwrap().view.unwrap();
        assert_eq!(view.lines.len(), 2);
        assert!(view.truncated);

        let view = run(&mut nb, 1, 80.0, CellWidth, Some(3)).unwrap().view.unwrap();
        assert!(!view.truncated);
    }

    #[test]
    fn missing_note_is_an_error() {
        let mut nb = notebook("");
        assert!(run(&mut nb, 2, 80.0, CellWidth, None).is_err());
    }
}
