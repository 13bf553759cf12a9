#![allow(non_upper_case_globals)]

use core::fmt;

use device::ErrorKind;

pub const MHz: u64 = 1_000_000;

#[cfg(feature = "mediatek_mt7621")]
pub mod mt7621;

/// One of the foundational rates every other clock is derived from
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BaseClock {
    Cpu,
    Sys,
    Ddr,
    Xtal,
}

/// How the rate of a clock is computed
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClockSource {
    /// The base rate itself
    Direct(BaseClock),
    /// Half of the base rate
    Halved(BaseClock),
    /// Crystal or the fixed peripheral PLL, selected by a live register bit
    PeripheralSelect,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The clock has no entry in the clock table
    UnknownClock,
    /// The clock has no bit in the gating register
    ClockIdOutOfRange,
    /// The system controller register window was not provided
    MissingSyscon,
    /// The memory controller register window was not provided
    MissingMemc,
}

impl device::Error for Error {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownClock => ErrorKind::Unsupported,
            Self::ClockIdOutOfRange => ErrorKind::OutOfRange,
            Self::MissingSyscon | Self::MissingMemc => ErrorKind::NoDevice,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownClock => write!(f, "unknown clock"),
            Self::ClockIdOutOfRange => write!(f, "clock has no gating bit"),
            Self::MissingSyscon => write!(f, "Unable to find sysc"),
            Self::MissingMemc => write!(f, "Unable to find memc"),
        }
    }
}
