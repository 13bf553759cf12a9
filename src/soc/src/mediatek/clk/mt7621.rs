//! MT7621 clock tree
//!
//! The four base rates (CPU, DDR, bus and crystal) are decoded once from the
//! bootstrap straps and PLL settings in the system controller (sysc) and the
//! memory controller (memc). Peripheral clocks are gated by one bit each in
//! `CLKCFG1`, the bit number being the clock id.

use device::{ClassId, ClkOps, DeviceId, Driver, ErrorType};
use log::{debug, error};
use oreboot_asm::io::{clrbits_32, readl, setbits_32};
use tock_registers::register_bitfields;

use super::{BaseClock, ClockSource, Error, MHz};
use crate::mediatek::bit;

pub const SYSC_MAP_SIZE: usize = 0x100;
pub const MEMC_MAP_SIZE: usize = 0x1000;

/* SYSC */
pub const SYSCFG0_REG: usize = 0x10;
pub const CLKCFG0_REG: usize = 0x2c;
/// Clock gating, bit n ungates clock id n
pub const CLKCFG1_REG: usize = 0x30;
pub const CUR_CLK_STS_REG: usize = 0x44;

/* MEMC */
pub const MEMPLL1_REG: usize = 0x0604;
pub const MEMPLL6_REG: usize = 0x0618;
pub const MEMPLL18_REG: usize = 0x0648;

/// Fixed rate of the peripheral PLL
pub const EPLL_CLK: u64 = 50 * MHz;
/// CPU rate when `CPU_CLK_SEL` picks the fixed CPU PLL
pub const CPU_PLL_FIXED_CLK: u64 = 500 * MHz;

/// Highest clock id with a bit in `CLKCFG1`
pub const MAX_GATE_ID: u32 = 31;

register_bitfields![u32,
    SYSCFG0 [
        XTAL_MODE_SEL OFFSET(6) NUMBITS(3) []
    ],
    CLKCFG0 [
        CPU_CLK_SEL OFFSET(30) NUMBITS(2) [],
        PERI_CLK_SEL OFFSET(4) NUMBITS(1) []
    ],
    CUR_CLK_STS [
        CUR_CPU_FDIV OFFSET(8) NUMBITS(5) [],
        CUR_CPU_FFRAC OFFSET(0) NUMBITS(5) []
    ],
    MEMPLL1 [
        RG_MEPL_DIV2_SEL OFFSET(1) NUMBITS(2) []
    ],
    // shared by MEMPLL6 and MEMPLL18
    MEMPLL_DIV [
        RG_MEPL_PREDIV OFFSET(12) NUMBITS(2) [],
        RG_MEPL_FBDIV OFFSET(4) NUMBITS(7) []
    ]
];

/// SYSCFG0[8:6], crystal frequency strap
pub fn xtal_mode_sel(syscfg0: u32) -> u32 {
    SYSCFG0::XTAL_MODE_SEL.read(syscfg0)
}

/// CLKCFG0[31:30], CPU clock source
pub fn cpu_clk_sel(clkcfg0: u32) -> u32 {
    CLKCFG0::CPU_CLK_SEL.read(clkcfg0)
}

/// CLKCFG0[4], peripheral clocks run from the crystal when set
pub fn peri_clk_sel(clkcfg0: u32) -> bool {
    CLKCFG0::PERI_CLK_SEL.is_set(clkcfg0)
}

/// CUR_CLK_STS[12:8], CPU post divider
pub fn cur_cpu_fdiv(cur_clk_sts: u32) -> u32 {
    CUR_CLK_STS::CUR_CPU_FDIV.read(cur_clk_sts)
}

/// CUR_CLK_STS[4:0], CPU post multiplier
pub fn cur_cpu_ffrac(cur_clk_sts: u32) -> u32 {
    CUR_CLK_STS::CUR_CPU_FFRAC.read(cur_clk_sts)
}

/// MEMPLL1[2:1], zero when the DDR PLL output is to be doubled
pub fn mepl_div2_sel(mempll1: u32) -> u32 {
    MEMPLL1::RG_MEPL_DIV2_SEL.read(mempll1)
}

/// MEMPLL6/MEMPLL18[13:12], pre-divider index
pub fn mepl_prediv(mempll: u32) -> u32 {
    MEMPLL_DIV::RG_MEPL_PREDIV.read(mempll)
}

/// MEMPLL6/MEMPLL18[10:4], feedback divider
pub fn mepl_fbdiv(mempll: u32) -> u32 {
    MEMPLL_DIV::RG_MEPL_FBDIV.read(mempll)
}

/// Crystal rate for a `XTAL_MODE_SEL` strap value
pub fn xtal_rate(xtal_sel: u32) -> u64 {
    match xtal_sel {
        0..=2 => 20 * MHz,
        3..=5 => 40 * MHz,
        _ => 25 * MHz,
    }
}

/// Divisor selected by a `RG_MEPL_PREDIV` index
pub fn mepl_prediv_divisor(dividx: u32) -> u64 {
    const XTAL_DIV_SHIFT: [u32; 4] = [0, 1, 2, 2];

    1 << XTAL_DIV_SHIFT[(dividx & 0x3) as usize]
}

/// CPU PLL rate configured in MEMPLL18
pub fn cpu_pll_rate(mempll18: u32, xtal_clk: u64) -> u64 {
    let fb = u64::from(mepl_fbdiv(mempll18));
    let xtal_div = mepl_prediv_divisor(mepl_prediv(mempll18));

    (fb + 1) * xtal_clk / xtal_div
}

/// DDR PLL rate configured in MEMPLL6, before the optional doubling
pub fn ddr_pll_rate(mempll6: u32, xtal_clk: u64) -> u64 {
    let fb = u64::from(mepl_fbdiv(mempll6));
    let xtal_div = mepl_prediv_divisor(mepl_prediv(mempll6));

    fb * xtal_clk / xtal_div
}

/// Apply the CUR_CLK_STS post divider and multiplier to a CPU rate
///
/// The divide truncates before the multiply. A zero divider yields 0.
pub fn cpu_clk_fixup(cpu_clk: u64, cur_clk_sts: u32) -> u64 {
    let ffiv = u64::from(cur_cpu_fdiv(cur_clk_sts));
    let ffrac = u64::from(cur_cpu_ffrac(cur_clk_sts));

    match cpu_clk.checked_div(ffiv) {
        Some(clk) => clk * ffrac,
        None => 0,
    }
}

/// Clock ids, numbered as in the MT7621 device tree bindings
#[repr(u32)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClockId {
    /* Peripheral clocks */
    Hsdma = 5,
    Fe = 6,
    Spdiftx = 7,
    Timer = 8,
    Intc = 9,
    Mc = 10,
    Pcm = 11,
    Pio = 13,
    Gdma = 14,
    Nfi = 15,
    I2c = 16,
    I2s = 17,
    Spi = 18,
    Uart1 = 19,
    Uart2 = 20,
    Uart3 = 21,
    Gmac = 23,
    Pcie0 = 24,
    Pcie1 = 25,
    Pcie2 = 26,
    Crypto = 29,
    Sdxc = 30,

    /* Base clocks */
    Xtal = 32,
    Cpu = 33,
    Ddr = 34,
    Sys = 35,
    MipsCnt = 36,
}

impl ClockId {
    pub const fn id(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for ClockId {
    type Error = Error;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        let clk = match id {
            5 => Self::Hsdma,
            6 => Self::Fe,
            7 => Self::Spdiftx,
            8 => Self::Timer,
            9 => Self::Intc,
            10 => Self::Mc,
            11 => Self::Pcm,
            13 => Self::Pio,
            14 => Self::Gdma,
            15 => Self::Nfi,
            16 => Self::I2c,
            17 => Self::I2s,
            18 => Self::Spi,
            19 => Self::Uart1,
            20 => Self::Uart2,
            21 => Self::Uart3,
            23 => Self::Gmac,
            24 => Self::Pcie0,
            25 => Self::Pcie1,
            26 => Self::Pcie2,
            29 => Self::Crypto,
            30 => Self::Sdxc,
            32 => Self::Xtal,
            33 => Self::Cpu,
            34 => Self::Ddr,
            35 => Self::Sys,
            36 => Self::MipsCnt,
            _ => return Err(Error::UnknownClock),
        };
        Ok(clk)
    }
}

/// Look up how the rate of `id` is derived
///
/// Clocks that are only gated, never rated, have no entry.
pub fn source_for(id: ClockId) -> Result<ClockSource, Error> {
    use ClockId::*;

    match id {
        Sys | Spi => Ok(ClockSource::Direct(BaseClock::Sys)),
        Ddr => Ok(ClockSource::Direct(BaseClock::Ddr)),
        Cpu => Ok(ClockSource::Direct(BaseClock::Cpu)),
        Xtal => Ok(ClockSource::Direct(BaseClock::Xtal)),
        MipsCnt => Ok(ClockSource::Halved(BaseClock::Cpu)),
        Uart1 | Uart2 | Uart3 | I2c | Timer => Ok(ClockSource::PeripheralSelect),
        _ => Err(Error::UnknownClock),
    }
}

/// `CLKCFG1` mask for a raw clock id
fn gate_mask(id: u32) -> Result<u32, Error> {
    if id > MAX_GATE_ID {
        return Err(Error::ClockIdOutOfRange);
    }
    Ok(bit(id))
}

pub static MT7621_CLK_IDS: [DeviceId; 1] = [DeviceId::new("mediatek,mt7621-clk", 0)];

pub static MT7621_CLK_DRIVER: Driver = Driver::new("mt7621-clk", ClassId::Clk, &MT7621_CLK_IDS);

/// MT7621 clock provider
///
/// Base rates are derived once in [`Mt7621Clk::new`] and never re-read; only
/// the peripheral clock select bit is sampled on every query.
#[derive(Debug)]
pub struct Mt7621Clk {
    sysc_base: usize,
    memc_base: usize,
    cpu_clk: u64,
    ddr_clk: u64,
    sys_clk: u64,
    xtal_clk: u64,
}

impl Mt7621Clk {
    /// Derive the clock tree from the mapped sysc and memc register windows
    pub fn new(sysc_base: usize, memc_base: usize) -> Self {
        let bs = readl(sysc_base + SYSCFG0_REG);
        let clkcfg0 = readl(sysc_base + CLKCFG0_REG);
        let cur_clk = readl(sysc_base + CUR_CLK_STS_REG);

        let xtal_clk = xtal_rate(xtal_mode_sel(bs));

        let cpu_clk = match cpu_clk_sel(clkcfg0) {
            0 => CPU_PLL_FIXED_CLK,
            1 => cpu_pll_rate(readl(memc_base + MEMPLL18_REG), xtal_clk),
            _ => xtal_clk,
        };
        let cpu_clk = cpu_clk_fixup(cpu_clk, cur_clk);

        let mut ddr_clk = ddr_pll_rate(readl(memc_base + MEMPLL6_REG), xtal_clk);
        if mepl_div2_sel(readl(memc_base + MEMPLL1_REG)) == 0 {
            ddr_clk *= 2;
        }

        let clk = Self {
            sysc_base,
            memc_base,
            cpu_clk,
            ddr_clk,
            sys_clk: cpu_clk / 4,
            xtal_clk,
        };

        debug!(
            "mt7621-clk: cpu {} Hz, ddr {} Hz, sys {} Hz, xtal {} Hz",
            clk.cpu_clk, clk.ddr_clk, clk.sys_clk, clk.xtal_clk
        );

        clk
    }

    /// Bind to the register windows resolved from the `mediatek,sysc` and
    /// `mediatek,memc` phandles, then derive the clock tree
    pub fn probe(sysc_base: Option<usize>, memc_base: Option<usize>) -> Result<Self, Error> {
        let sysc_base = sysc_base.ok_or_else(|| {
            error!("{}: {}", MT7621_CLK_DRIVER.name(), Error::MissingSyscon);
            Error::MissingSyscon
        })?;
        let memc_base = memc_base.ok_or_else(|| {
            error!("{}: {}", MT7621_CLK_DRIVER.name(), Error::MissingMemc);
            Error::MissingMemc
        })?;

        Ok(Self::new(sysc_base, memc_base))
    }

    pub fn sysc_base(&self) -> usize {
        self.sysc_base
    }

    pub fn memc_base(&self) -> usize {
        self.memc_base
    }

    pub fn base_rate(&self, base: BaseClock) -> u64 {
        match base {
            BaseClock::Cpu => self.cpu_clk,
            BaseClock::Sys => self.sys_clk,
            BaseClock::Ddr => self.ddr_clk,
            BaseClock::Xtal => self.xtal_clk,
        }
    }

    /// Rate of `id` in Hz, 0 for clocks without a known rate
    pub fn rate_of(&self, id: ClockId) -> u64 {
        match source_for(id) {
            Ok(ClockSource::Direct(base)) => self.base_rate(base),
            Ok(ClockSource::Halved(base)) => self.base_rate(base) / 2,
            Ok(ClockSource::PeripheralSelect) => {
                if peri_clk_sel(readl(self.sysc_base + CLKCFG0_REG)) {
                    self.xtal_clk
                } else {
                    EPLL_CLK
                }
            }
            Err(e) => {
                debug!("mt7621-clk: {:?}: {}", id, e);
                0
            }
        }
    }

    pub fn enable(&mut self, id: ClockId) -> Result<(), Error> {
        self.gate(id.id(), true)
    }

    pub fn disable(&mut self, id: ClockId) -> Result<(), Error> {
        self.gate(id.id(), false)
    }

    fn gate(&mut self, id: u32, on: bool) -> Result<(), Error> {
        let mask = gate_mask(id)?;
        let reg = self.sysc_base + CLKCFG1_REG;

        if on {
            setbits_32(reg, mask);
        } else {
            clrbits_32(reg, mask);
        }

        Ok(())
    }
}

impl ErrorType for Mt7621Clk {
    type Error = Error;
}

impl ClkOps for Mt7621Clk {
    fn enable(&mut self, id: u32) -> Result<(), Self::Error> {
        self.gate(id, true)
    }

    fn disable(&mut self, id: u32) -> Result<(), Self::Error> {
        self.gate(id, false)
    }

    fn get_rate(&self, id: u32) -> u64 {
        match ClockId::try_from(id) {
            Ok(clk) => self.rate_of(clk),
            Err(_) => 0,
        }
    }
}
