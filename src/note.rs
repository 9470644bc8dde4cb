use midly::num::u7;
use std::fmt;
use thiserror::Error;

/// One of the twelve note names, independent of octave.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PitchClass {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("no such pitch class: {0}")]
pub struct NoSuchPitchClass(pub u8);

impl PitchClass {
    /// Pitch classes indexed by `key % 12`.
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::CSharp,
        PitchClass::D,
        PitchClass::DSharp,
        PitchClass::E,
        PitchClass::F,
        PitchClass::FSharp,
        PitchClass::G,
        PitchClass::GSharp,
        PitchClass::A,
        PitchClass::ASharp,
        PitchClass::B,
    ];

    pub fn lookup(value: u8) -> Result<PitchClass, NoSuchPitchClass> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(NoSuchPitchClass(value))
    }

    pub fn of_key(key: u7) -> PitchClass {
        Self::ALL[(key.as_int() % 12) as usize]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "C#",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#",
            PitchClass::A => "A",
            PitchClass::ASharp => "A#",
            PitchClass::B => "B",
        }
    }

    /// The variant name as written in Rust source.
    pub fn ident(&self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "CSharp",
            PitchClass::D => "D",
            PitchClass::DSharp => "DSharp",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "FSharp",
            PitchClass::G => "G",
            PitchClass::GSharp => "GSharp",
            PitchClass::A => "A",
            PitchClass::ASharp => "ASharp",
            PitchClass::B => "B",
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A channel voice event from a MIDI track, with the pitch split into octave and
/// pitch class.
///
/// `octave` and `name` are derived from `key`; use [`Note::new`] unless you are
/// writing out a note that was already extracted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Note {
    pub key: u8,
    pub octave: i8,
    pub name: PitchClass,
    pub velocity: u8,
    pub command: u8,
}

impl Note {
    pub fn new(key: u7, velocity: u7, command: u8) -> Self {
        Self {
            key: key.as_int(),
            octave: octave_of(key),
            name: PitchClass::of_key(key),
            velocity: velocity.as_int(),
            command,
        }
    }
}

/// Octave number with middle C (key 60) in octave 4.
pub fn octave_of(key: u7) -> i8 {
    (key.as_int() / 12) as i8 - 1
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Note(key={}, octave={}, name={}, velocity={}, command={})",
            self.key, self.octave, self.name, self.velocity, self.command
        )
    }
}
