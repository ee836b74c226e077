use std::fs;
use std::io;

use anyhow::Result;
use clap::Parser;

use samplecheck::spc::file::SpcFile;
use samplecheck::spc::fingerprint;

#[derive(Parser)]
#[command(
    about = "Fingerprints the samples in use by an SPC700 state snapshot",
    author = "Thomas <thomas@thomasw.dev>",
    long_about = None)]
struct Args {
    /// SPC file to fingerprint.
    filename: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let f = fs::read(&args.filename)?;
    let spc = SpcFile::load(&f)?;

    let entries = fingerprint::fingerprint(&spc)?;
    fingerprint::dump(&entries, io::stdout().lock())?;

    Ok(())
}
