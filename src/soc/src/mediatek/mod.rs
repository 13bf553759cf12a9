pub mod clk;

#[cfg(feature = "mediatek_mt7621")]
pub mod cpuinfo;

pub const fn bit(nr: u32) -> u32 {
    1u32 << nr
}
