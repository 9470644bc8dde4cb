use crate::note::Note;
use anyhow::{Context, Result};
use log::debug;
use midly::{
    num::u7,
    MidiMessage::{
        self, Aftertouch, ChannelAftertouch, Controller, NoteOff, NoteOn, PitchBend, ProgramChange,
    },
    TrackEvent,
    TrackEventKind::Midi,
};
use std::path::Path;

/// Notes of one MIDI track in event order
pub type Track = Vec<Note>;
/// One `Track` per MIDI track in the file, in file order
pub type Score = Vec<Track>;

/// A channel voice message seen as its status nibble and two data bytes, the way
/// it is laid out on the wire. Messages with a single data byte get zero as the
/// second one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChannelVoice {
    pub command: u8,
    pub data1: u7,
    pub data2: u7,
}

impl From<MidiMessage> for ChannelVoice {
    fn from(message: MidiMessage) -> Self {
        let zero = u7::from(0);
        let (command, data1, data2) = match message {
            NoteOff { key, vel } => (0x80, key, vel),
            NoteOn { key, vel } => (0x90, key, vel),
            Aftertouch { key, vel } => (0xA0, key, vel),
            Controller { controller, value } => (0xB0, controller, value),
            ProgramChange { program } => (0xC0, program, zero),
            ChannelAftertouch { vel } => (0xD0, vel, zero),
            PitchBend { bend } => {
                let raw = bend.0.as_int();
                (
                    0xE0,
                    u7::from((raw & 0x7f) as u8),
                    u7::from((raw >> 7) as u8),
                )
            }
        };
        ChannelVoice {
            command,
            data1,
            data2,
        }
    }
}

impl From<ChannelVoice> for Note {
    fn from(message: ChannelVoice) -> Self {
        Note::new(message.data1, message.data2, message.command)
    }
}

/// Converts the channel voice events of a track into notes. Meta, sysex and
/// escape events are skipped.
pub fn extract_track(events: &[TrackEvent]) -> Track {
    events
        .iter()
        .filter_map(|event| match event.kind {
            Midi {
                channel: _,
                message,
            } => Some(Note::from(ChannelVoice::from(message))),
            _ => None,
        })
        .collect()
}

pub fn extract_score<'a, T>(tracks: &[T]) -> Score
where
    T: AsRef<[TrackEvent<'a>]>,
{
    tracks
        .iter()
        .enumerate()
        .map(|(track_index, events)| {
            let track = extract_track(events.as_ref());
            debug!("track {} has {} notes", track_index, track.len());
            track
        })
        .collect()
}

pub fn load_midi_file(path: &Path) -> Result<Score> {
    let data = std::fs::read(path)
        .with_context(|| format!("Failed to read MIDI file: {}", path.display()))?;
    let smf = midly::Smf::parse(&data)
        .with_context(|| format!("Failed to parse MIDI file: {}", path.display()))?;
    Ok(extract_score(&smf.tracks))
}
