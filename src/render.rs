//! Text and Rust source renderings of an extracted score.

use crate::{note::Note, score::Score};

const INDENT: &str = "    ";

/// Renders the score as nested bracketed lists, e.g.
/// `[[Note(key=60, octave=4, name=C, velocity=80, command=144)], []]`.
pub fn render_text(score: &Score) -> String {
    let tracks = score
        .iter()
        .map(|track| {
            let notes = track.iter().map(Note::to_string).collect::<Vec<_>>();
            format!("[{}]", notes.join(", "))
        })
        .collect::<Vec<_>>();
    format!("[{}]\n", tracks.join(", "))
}

/// Renders the score as a Rust module with one `trackN` constant per track. The
/// generated file compiles against this crate's `note` module.
pub fn render_source(score: &Score) -> String {
    let mut out = SourceWriter::new();
    out.line("use midi_notes::note::{Note, PitchClass::*};");
    out.blank();
    out.open("pub mod midi_data {");
    out.line("#![allow(non_upper_case_globals)]");
    out.line("use super::*;");
    out.blank();
    for (i, track) in score.iter().enumerate() {
        if track.is_empty() {
            out.line(&format!("pub const track{i}: &[Note] = &[];"));
        } else {
            out.open(&format!("pub const track{i}: &[Note] = &["));
            for note in track {
                out.line(&format!("{},", note_literal(note)));
            }
            out.close("];");
        }
        out.blank();
    }
    out.close("}");
    out.finish()
}

fn note_literal(note: &Note) -> String {
    format!(
        "Note {{ key: {}, octave: {}, name: {}, velocity: {}, command: {} }}",
        note.key,
        note.octave,
        note.name.ident(),
        note.velocity,
        note.command
    )
}

/// Line-oriented string builder that tracks nesting depth.
struct SourceWriter {
    buf: String,
    depth: usize,
}

impl SourceWriter {
    fn new() -> Self {
        Self {
            buf: String::new(),
            depth: 0,
        }
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.buf.push_str(INDENT);
        }
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Writes `text` at the current depth and nests the following lines.
    fn open(&mut self, text: &str) {
        self.line(text);
        self.depth += 1;
    }

    /// Leaves one level of nesting and writes `text` there.
    fn close(&mut self, text: &str) {
        debug_assert!(self.depth > 0, "close without matching open");
        self.depth = self.depth.saturating_sub(1);
        self.line(text);
    }

    fn finish(self) -> String {
        debug_assert_eq!(self.depth, 0, "unclosed block in generated source");
        self.buf
    }
}
