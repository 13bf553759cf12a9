/// Timer frequency assumed until the clock driver reports the real one
#[cfg(feature = "mt7621")]
pub const SYS_MIPS_TIMER_FREQ: u64 = 440_000_000;

// Default timer frequency
#[cfg(not(feature = "mt7621"))]
pub const SYS_MIPS_TIMER_FREQ: u64 = 0;
