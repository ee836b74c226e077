use std::io::Write;

use anyhow::Result;
use arrayvec::ArrayVec;

use super::file::SpcFile;
use super::instrument::InstrumentEntry;

/// RAM address of the sound engine's instrument table.
pub const INSTRUMENT_TBL_ADDR: usize = 0x6C00;
/// Number of slots in the instrument table.
pub const INSTRUMENT_TBL_LEN: usize = 0x2A;

/// RAM address of the sample directory table (4 bytes per entry).
/// Never read by this tool; the srcn plausibility limit below stands
/// in for a cross-check against the directory.
pub const SAMPLE_TBL_ADDR: usize = 0x6D00;
/// Width of one sample directory entry, in bytes.
pub const SAMPLE_ENTRY_LEN: usize = 4;

/// Highest sample source number considered plausible. Unused slots
/// tend to hold leftover garbage with srcn far above anything the
/// sample directory actually contains.
pub const SRCN_PLAUSIBLE_MAX: u8 = 0x4F;

/// Decodes the full instrument table, in slot order.
pub fn decode_table(spc: &SpcFile) -> Result<ArrayVec<InstrumentEntry, INSTRUMENT_TBL_LEN>> {
    let mut stream = spc.ram()[INSTRUMENT_TBL_ADDR..].iter().copied();

    let mut entries = ArrayVec::new();
    for _ in 0..INSTRUMENT_TBL_LEN {
        entries.push(InstrumentEntry::decode(&mut stream)?);
    }
    Ok(entries)
}

/// Fingerprints a snapshot: every instrument table entry with a
/// plausible source number, in slot order.
pub fn fingerprint(spc: &SpcFile) -> Result<ArrayVec<InstrumentEntry, INSTRUMENT_TBL_LEN>> {
    Ok(decode_table(spc)?
        .into_iter()
        .filter(|e| e.srcn <= SRCN_PLAUSIBLE_MAX)
        .collect())
}

/// Writes one line per retained entry. The printed index is the
/// position in the filtered sequence, not the original slot number.
pub fn dump(entries: &[InstrumentEntry], mut out: impl Write) -> Result<()> {
    for (i, e) in entries.iter().enumerate() {
        writeln!(out, "{:2X}: {}", i, e)?;
    }
    Ok(())
}
