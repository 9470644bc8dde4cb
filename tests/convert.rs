//! End-to-end tests: MIDI file on disk -> `_data.rs` and `_data.txt`

#[rustfmt::skip]
#[path = "fixtures/two_tracks_data.rs"]
mod two_tracks_data;

use midi_notes::{
    convert,
    output::OutputPaths,
    render::{render_source, render_text},
    score::load_midi_file,
};
use midly::{
    num::{u15, u28, u4, u7},
    Format, Header, MetaMessage, MidiMessage, Smf, Timing, TrackEvent, TrackEventKind,
};
use std::{fs, path::Path, process::Command};
use tempfile::tempdir;

const SOURCE_FIXTURE: &str = include_str!("fixtures/two_tracks_data.rs");
const TEXT_FIXTURE: &str = include_str!("fixtures/two_tracks_data.txt");

fn event(delta: u32, kind: TrackEventKind) -> TrackEvent {
    TrackEvent {
        delta: u28::new(delta),
        kind,
    }
}

fn note_event(delta: u32, message: MidiMessage) -> TrackEvent<'static> {
    event(
        delta,
        TrackEventKind::Midi {
            channel: u4::new(0),
            message,
        },
    )
}

/// Two tracks: a named one with a note-on/note-off pair and one with no notes.
fn write_two_track_midi(path: &Path) {
    let mut smf = Smf::new(Header::new(Format::Parallel, Timing::Metrical(u15::new(480))));
    smf.tracks.push(vec![
        event(0, TrackEventKind::Meta(MetaMessage::TrackName(b"piano"))),
        note_event(
            0,
            MidiMessage::NoteOn {
                key: u7::new(60),
                vel: u7::new(80),
            },
        ),
        note_event(
            480,
            MidiMessage::NoteOff {
                key: u7::new(60),
                vel: u7::new(0),
            },
        ),
        event(0, TrackEventKind::Meta(MetaMessage::EndOfTrack)),
    ]);
    smf.tracks
        .push(vec![event(0, TrackEventKind::Meta(MetaMessage::EndOfTrack))]);
    smf.save(path).expect("Failed to write test MIDI file");
}

#[test]
fn convert_writes_source_and_text() {
    let dir = tempdir().unwrap();
    let midi_path = dir.path().join("two_tracks.mid");
    write_two_track_midi(&midi_path);

    let paths = convert(&midi_path).unwrap();

    assert_eq!(paths.source, dir.path().join("two_tracks_data.rs"));
    assert_eq!(paths.text, dir.path().join("two_tracks_data.txt"));
    assert_eq!(fs::read_to_string(&paths.source).unwrap(), SOURCE_FIXTURE);
    assert_eq!(fs::read_to_string(&paths.text).unwrap(), TEXT_FIXTURE);
}

#[test]
fn generated_source_renders_back_to_same_text() {
    use two_tracks_data::midi_data::{track0, track1};

    let dir = tempdir().unwrap();
    let midi_path = dir.path().join("two_tracks.mid");
    write_two_track_midi(&midi_path);
    let extracted = load_midi_file(&midi_path).unwrap();

    let compiled = vec![track0.to_vec(), track1.to_vec()];
    assert_eq!(compiled, extracted);
    assert_eq!(render_text(&compiled), render_text(&extracted));
    assert_eq!(render_source(&compiled), SOURCE_FIXTURE);
}

#[test]
fn convert_overwrites_previous_output() {
    let dir = tempdir().unwrap();
    let midi_path = dir.path().join("two_tracks.v2.mid");
    write_two_track_midi(&midi_path);
    let paths = OutputPaths::for_input(&midi_path);
    fs::write(&paths.text, "x".repeat(4096)).unwrap();
    fs::write(&paths.source, "x".repeat(4096)).unwrap();

    convert(&midi_path).unwrap();

    assert_eq!(fs::read_to_string(&paths.text).unwrap(), TEXT_FIXTURE);
    assert_eq!(fs::read_to_string(&paths.source).unwrap(), SOURCE_FIXTURE);
}

#[test]
fn invalid_midi_writes_nothing() {
    let dir = tempdir().unwrap();
    let midi_path = dir.path().join("broken.mid");
    fs::write(&midi_path, b"this is not a midi file").unwrap();

    let err = convert(&midi_path).unwrap_err();

    assert!(err.to_string().contains("broken.mid"));
    let paths = OutputPaths::for_input(&midi_path);
    assert!(!paths.source.exists());
    assert!(!paths.text.exists());
}

#[test]
fn binary_fails_without_argument() {
    let status = Command::new(env!("CARGO_BIN_EXE_midi-notes"))
        .status()
        .unwrap();
    assert!(!status.success());
}

#[test]
fn binary_fails_on_missing_file() {
    let dir = tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_midi-notes"))
        .arg(dir.path().join("missing.mid"))
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing.mid"));
}

#[test]
fn binary_converts_file() {
    let dir = tempdir().unwrap();
    let midi_path = dir.path().join("song.mid");
    write_two_track_midi(&midi_path);

    let status = Command::new(env!("CARGO_BIN_EXE_midi-notes"))
        .arg(&midi_path)
        .status()
        .unwrap();

    assert!(status.success());
    assert_eq!(
        fs::read_to_string(dir.path().join("song_data.txt")).unwrap(),
        TEXT_FIXTURE
    );
}
