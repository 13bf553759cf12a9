//! 32-bit MMIO accessors modelled on the u-boot headers:
//! <arch/mips/include/asm/io.h> and <linux/io.h>

use core::ptr::{read_volatile, write_volatile};

fn _raw_readl(a: usize) -> u32 {
    unsafe { read_volatile::<u32>(a as *const u32) }
}

fn _raw_writel(v: u32, a: usize) {
    unsafe { write_volatile::<u32>(a as *mut u32, v) }
}

fn readl_relaxed(c: usize) -> u32 {
    u32::from_le(_raw_readl(c))
}

fn writel_relaxed(v: u32, c: usize) {
    _raw_writel(v.to_le(), c);
}

/// Read a 32-bit little-endian device register at address `c`
pub fn readl(c: usize) -> u32 {
    readl_relaxed(c)
}

/// Write `v` to the 32-bit little-endian device register at address `c`
pub fn writel(v: u32, c: usize) {
    writel_relaxed(v, c);
}

/// Read-modify-write: clear the bits in `clear`, then set the bits in `set`
pub fn clrsetbits_32(c: usize, clear: u32, set: u32) {
    let v = readl(c);
    writel((v & !clear) | set, c);
}

/// Read-modify-write: set the bits in `set`
pub fn setbits_32(c: usize, set: u32) {
    clrsetbits_32(c, 0, set);
}

/// Read-modify-write: clear the bits in `clear`
pub fn clrbits_32(c: usize, clear: u32) {
    clrsetbits_32(c, clear, 0);
}
