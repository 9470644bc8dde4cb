use anyhow::Result;
use midi_notes::{cmdline::parse_args, convert};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("midi_notes=info"))
        .init();
    let args = parse_args();
    convert(&args.midi_file)?;
    Ok(())
}
