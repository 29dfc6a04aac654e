//! Directory of selectable wave banks.
//!
//! Six stored banks followed by the pseudo bank, whose waves are computed in closed form.

use core::fmt;

use super::pseudo_wave::PSEUDO_WAVE_COUNT;
use crate::resources::waves::{WaveBanks, NUM_WAVE_BANKS};
use crate::resources::Wave;

/// Number of directory entries, stored banks plus the pseudo bank.
pub const NUM_BANKS: usize = NUM_WAVE_BANKS + 1;

/// Index of the pseudo bank.
pub const PSEUDO_BANK: usize = NUM_BANKS - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A stored bank has no waves.
    EmptyBank { bank: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBank { bank } => write!(f, "wave bank {bank} contains no waves"),
        }
    }
}

/// One directory entry.
#[derive(Debug, Clone, Copy)]
pub enum Bank<'a> {
    /// Stored single-cycle waves.
    Table(&'a [Wave]),
    /// Closed-form waves.
    Pseudo,
}

impl Bank<'_> {
    /// Number of waves selectable in this bank. Never zero.
    pub fn count(&self) -> usize {
        match self {
            Self::Table(waves) => waves.len(),
            Self::Pseudo => PSEUDO_WAVE_COUNT,
        }
    }

    pub fn is_pseudo(&self) -> bool {
        matches!(self, Self::Pseudo)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct WaveDirectory<'a> {
    banks: [Bank<'a>; NUM_BANKS],
}

impl WaveDirectory<'static> {
    /// Directory over the built-in banks.
    pub fn builtin() -> Self {
        Self::from_tables(WaveBanks::get().banks())
    }
}

impl Default for WaveDirectory<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> WaveDirectory<'a> {
    /// Directory over caller-supplied banks. The pseudo bank is appended.
    pub fn new(tables: [&'a [Wave]; NUM_WAVE_BANKS]) -> Result<Self, Error> {
        if let Some(bank) = tables.iter().position(|waves| waves.is_empty()) {
            return Err(Error::EmptyBank { bank });
        }

        Ok(Self::from_tables(tables))
    }

    fn from_tables(tables: [&'a [Wave]; NUM_WAVE_BANKS]) -> Self {
        let mut banks = [Bank::Pseudo; NUM_BANKS];
        for (bank, waves) in banks.iter_mut().zip(tables) {
            *bank = Bank::Table(waves);
        }

        Self { banks }
    }

    /// Entry at `index`, taken modulo the directory length.
    #[inline]
    pub fn bank(&self, index: usize) -> Bank<'a> {
        self.banks[index % NUM_BANKS]
    }

    pub fn len(&self) -> usize {
        NUM_BANKS
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}
