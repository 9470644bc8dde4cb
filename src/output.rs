use anyhow::{Context, Result};
use log::warn;
use std::{
    ffi::OsString,
    fs::{self, File, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

/// Files written for one MIDI input, next to the input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub source: PathBuf,
    pub text: PathBuf,
}

impl OutputPaths {
    /// `dir/song.mid` -> `dir/song_data.rs` and `dir/song_data.txt`
    pub fn for_input(midi_path: &Path) -> Self {
        let stem = stem(midi_path);
        Self {
            source: with_suffix(&stem, "_data.rs"),
            text: with_suffix(&stem, "_data.txt"),
        }
    }
}

/// The path with its file name cut at the first `.`, so that
/// `song.v2.mid` becomes `song`.
pub fn stem(path: &Path) -> PathBuf {
    let Some(file_name) = path.file_name() else {
        return path.to_path_buf();
    };
    let file_name = file_name.to_string_lossy();
    let truncated = match file_name.split_once('.') {
        Some((before, _)) => before,
        None => file_name.as_ref(),
    };
    path.with_file_name(truncated)
}

fn with_suffix(stem: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(stem.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// Creates an empty file at `path`, replacing whatever was there. A failed
/// attempt is retried once before giving up.
pub fn create_fresh_file(path: &Path) -> Result<File> {
    match recreate(path) {
        Ok(file) => Ok(file),
        Err(err) => {
            warn!("Could not create {}: {}, retrying", path.display(), err);
            recreate(path).with_context(|| format!("Failed to create {}", path.display()))
        }
    }
}

fn recreate(path: &Path) -> io::Result<File> {
    match fs::remove_file(path) {
        Err(err) if err.kind() != io::ErrorKind::NotFound => return Err(err),
        _ => {}
    }
    OpenOptions::new().write(true).create_new(true).open(path)
}

pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    let mut file = create_fresh_file(path)?;
    file.write_all(contents.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))
}
