use anyhow::Result;
use thiserror::Error;

/// Length of the SPC container header (ID tag, CPU/DSP registers,
/// ID666 metadata), skipped entirely.
pub const SPC_HEADER_LEN: usize = 0x100;
/// Size of the SPC700's addressable RAM.
pub const SPC_RAM_SIZE: usize = 0x10000;

#[derive(Debug, Error)]
enum LoadErr {
    #[error("Truncated SPC file: {got} bytes, need at least {need}")]
    Truncated { got: usize, need: usize },
}

/// An SPC700 state snapshot, reduced to its RAM image.
///
/// Everything this tool needs lives at fixed addresses in RAM; the
/// container header is discarded at load time.
pub struct SpcFile {
    ram: Vec<u8>,
}

impl SpcFile {
    /// Loads a snapshot from the raw file contents.
    /// Fails if the file is too short to contain the full RAM image.
    pub fn load(data: &[u8]) -> Result<Self> {
        let need = SPC_HEADER_LEN + SPC_RAM_SIZE;
        if data.len() < need {
            return Err(LoadErr::Truncated {
                got: data.len(),
                need,
            }
            .into());
        }

        Ok(Self {
            ram: Vec::from(&data[SPC_HEADER_LEN..need]),
        })
    }

    /// The full 64K RAM image.
    pub fn ram(&self) -> &[u8] {
        &self.ram
    }
}
