#![no_std]

#[cfg(feature = "mediatek")]
pub mod mediatek;
