use midi_notes::note::{Note, PitchClass::*};

pub mod midi_data {
    #![allow(non_upper_case_globals)]
    use super::*;

    pub const track0: &[Note] = &[
        Note { key: 60, octave: 4, name: C, velocity: 80, command: 144 },
        Note { key: 60, octave: 4, name: C, velocity: 0, command: 128 },
    ];

    pub const track1: &[Note] = &[];

}
