use core::fmt;

use log::info;
use oreboot_asm::io::readl;
use oreboot_global_data::set_timer_freq;
use tock_registers::register_bitfields;

use super::clk::{
    mt7621::{ClockId, Mt7621Clk, SYSCFG0_REG},
    MHz,
};

pub const SYSCTL_CHIP_REV_ID_REG: usize = 0x0c;

register_bitfields![u32,
    CHIP_REV_ID [
        CPU_ID OFFSET(17) NUMBITS(1) [],
        PKG_ID OFFSET(16) NUMBITS(1) [],
        VER_ID OFFSET(8) NUMBITS(4) [],
        ECO_ID OFFSET(0) NUMBITS(4) []
    ],
    SYSCFG0 [
        DRAM_TYPE OFFSET(4) NUMBITS(1) [],
        CHIP_MODE OFFSET(0) NUMBITS(4) []
    ]
];

/// Boot device for a `CHIP_MODE` strap value
pub fn boot_device(chip_mode: u32) -> Option<&'static str> {
    match chip_mode {
        1 => Some("NAND 2K+64"),
        2 => Some("SPI-NOR 3-Byte Addr"),
        3 => Some("SPI-NOR 4-Byte Addr"),
        10 => Some("NAND 2K+128"),
        11 => Some("NAND 4K+128"),
        12 => Some("NAND 4K+256"),
        _ => None,
    }
}

/// Chip identification and clock rates shown at boot
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CpuInfo {
    /// package variant letter, MT7621A/N/S
    variant: char,
    ver: u32,
    eco: u32,
    /// DDR generation, 2 or 3
    dram: u32,
    chip_mode: u32,
    cpu_clk: u64,
    ddr_clk: u64,
    bus_clk: u64,
    xtal_clk: u64,
    timer_freq: u64,
}

impl CpuInfo {
    /// Decode the chip registers and read back the named clock rates
    pub fn new(sysc_base: usize, clk: &Mt7621Clk) -> Self {
        let rev = readl(sysc_base + SYSCTL_CHIP_REV_ID_REG);
        let core = CHIP_REV_ID::CPU_ID.is_set(rev);
        let pkg = CHIP_REV_ID::PKG_ID.is_set(rev);
        let variant = match (core, pkg) {
            (true, true) => 'A',
            (true, false) => 'N',
            (false, _) => 'S',
        };

        let val = readl(sysc_base + SYSCFG0_REG);
        let dram = if SYSCFG0::DRAM_TYPE.is_set(val) { 2 } else { 3 };

        Self {
            variant,
            ver: CHIP_REV_ID::VER_ID.read(rev),
            eco: CHIP_REV_ID::ECO_ID.read(rev),
            dram,
            chip_mode: SYSCFG0::CHIP_MODE.read(val),
            cpu_clk: clk.rate_of(ClockId::Cpu),
            ddr_clk: clk.rate_of(ClockId::Ddr),
            bus_clk: clk.rate_of(ClockId::Sys),
            xtal_clk: clk.rate_of(ClockId::Xtal),
            timer_freq: clk.rate_of(ClockId::MipsCnt),
        }
    }

    pub fn variant(&self) -> char {
        self.variant
    }

    pub fn ver(&self) -> u32 {
        self.ver
    }

    pub fn eco(&self) -> u32 {
        self.eco
    }

    pub fn dram(&self) -> u32 {
        self.dram
    }

    pub fn boot_device(&self) -> &'static str {
        boot_device(self.chip_mode).unwrap_or("Unsupported boot mode")
    }

    /// Rate of the CPU counter, 0 if the clock driver could not derive it
    pub fn timer_freq(&self) -> u64 {
        self.timer_freq
    }
}

impl fmt::Display for CpuInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "CPU:   MediaTek MT7621{} ver {}, eco {}",
            self.variant, self.ver, self.eco
        )?;
        writeln!(f, "Boot:  DDR{}, {}", self.dram, self.boot_device())?;
        write!(
            f,
            "Clock: CPU: {}MHz, DDR: {}MT/s, Bus: {}MHz, XTAL: {}MHz",
            self.cpu_clk / MHz,
            self.ddr_clk / 500_000,
            self.bus_clk / MHz,
            self.xtal_clk / MHz
        )
    }
}

/// Print the boot banner and switch the delay timer to the derived counter rate
///
/// A zero counter rate keeps the board default.
pub fn print_cpuinfo(sysc_base: usize, clk: &Mt7621Clk) -> CpuInfo {
    let cpuinfo = CpuInfo::new(sysc_base, clk);

    if cpuinfo.timer_freq() != 0 {
        set_timer_freq(cpuinfo.timer_freq());
    }

    info!("{}", cpuinfo);

    cpuinfo
}
