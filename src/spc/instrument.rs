use std::fmt;

use anyhow::Result;
use thiserror::Error;

/// Width of one instrument table entry, in bytes.
pub const INSTRUMENT_ENTRY_LEN: usize = 6;

#[derive(Debug, Error)]
enum DecodeErr {
    #[error("End of entry stream")]
    EndOfStream,
}

/// One slot of the sound engine's instrument table.
///
/// Wire format is 6 bytes: srcn, adsr (LE), gain, pitch_adj (LE).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct InstrumentEntry {
    /// Sample source number (index into the sample directory)
    pub srcn: u8,
    /// Packed ADSR envelope control
    pub adsr: u16,
    /// Gain / envelope mode
    pub gain: u8,
    /// Pitch scaling adjustment
    pub pitch_adj: u16,
}

impl InstrumentEntry {
    /// Try to decode a single entry from an iterator, consuming
    /// exactly 6 bytes.
    pub fn decode(stream: &mut impl Iterator<Item = u8>) -> Result<Self> {
        let mut rd = || -> Result<u8> { Ok(stream.next().ok_or(DecodeErr::EndOfStream)?) };

        let srcn = rd()?;
        let mut adsr = rd()? as u16;
        adsr |= (rd()? as u16) << 8;
        let gain = rd()?;
        let mut pitch_adj = rd()? as u16;
        pitch_adj |= (rd()? as u16) << 8;

        Ok(Self {
            srcn,
            adsr,
            gain,
            pitch_adj,
        })
    }

    /// Encodes the entry back to its 6-byte wire form.
    ///
    /// Not used when fingerprinting; the snapshot is never written
    /// back.
    pub fn encode(&self) -> [u8; INSTRUMENT_ENTRY_LEN] {
        [
            self.srcn,
            self.adsr as u8,
            (self.adsr >> 8) as u8,
            self.gain,
            self.pitch_adj as u8,
            (self.pitch_adj >> 8) as u8,
        ]
    }
}

impl fmt::Display for InstrumentEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // No closing '>'; consumers parse the established line format
        // as-is.
        write!(
            f,
            "InstrEntry<srcn={:02X} adsr={:04X} gain={:02X} pitch_adj={:04X}",
            self.srcn, self.adsr, self.gain, self.pitch_adj
        )
    }
}
