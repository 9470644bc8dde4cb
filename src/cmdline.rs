use std::path::PathBuf;

use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(
    name = "midi-notes",
    about = "Extract the notes of a MIDI file into Rust source and a text dump"
)]
pub struct Cli {
    /// Standard MIDI File to read
    #[structopt(parse(from_os_str))]
    pub midi_file: PathBuf,
}

pub fn parse_args() -> Cli {
    Cli::from_args()
}
