pub mod cmdline;
pub mod note;
pub mod output;
pub mod render;
pub mod score;

use anyhow::Result;
use log::info;
use output::{write_file, OutputPaths};
use render::{render_source, render_text};
use score::load_midi_file;
use std::path::Path;

/// Reads `midi_path` and writes its notes as `<stem>_data.rs` and
/// `<stem>_data.txt` next to it. Nothing is written if the MIDI file can't be
/// loaded.
pub fn convert(midi_path: &Path) -> Result<OutputPaths> {
    info!("Reading {}", midi_path.display());
    let score = load_midi_file(midi_path)?;
    info!(
        "Extracted {} notes from {} tracks",
        score.iter().map(Vec::len).sum::<usize>(),
        score.len()
    );

    let paths = OutputPaths::for_input(midi_path);
    write_file(&paths.source, &render_source(&score))?;
    info!("Wrote {}", paths.source.display());
    write_file(&paths.text, &render_text(&score))?;
    info!("Wrote {}", paths.text.display());
    Ok(paths)
}
