use spin::rwlock::RwLock;

use crate::config::SYS_MIPS_TIMER_FREQ;

/// Architecture-specific global data
///
/// (originally arch_global_data from U-Boot)
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ArchGlobalData {
    /// Frequency of the CPU counter used for delays, in Hz
    timer_freq: u64,
}

impl ArchGlobalData {
    pub const fn new() -> Self {
        Self {
            timer_freq: SYS_MIPS_TIMER_FREQ,
        }
    }

    pub fn timer_freq(&self) -> u64 {
        self.timer_freq
    }

    pub fn set_timer_freq(&mut self, hz: u64) {
        self.timer_freq = hz;
    }
}

impl Default for ArchGlobalData {
    fn default() -> Self {
        Self::new()
    }
}

static ARCH: RwLock<ArchGlobalData> = RwLock::new(ArchGlobalData::new());

pub fn timer_freq() -> u64 {
    ARCH.read().timer_freq()
}

pub fn set_timer_freq(hz: u64) {
    ARCH.write().set_timer_freq(hz);
}

/// Timebase clock frequency used by the delay routines
pub fn get_tbclk() -> u64 {
    timer_freq()
}
