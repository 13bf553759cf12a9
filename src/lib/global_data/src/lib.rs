#![no_std]

pub mod arch;
pub mod config;

pub use arch::{get_tbclk, set_timer_freq, timer_freq, ArchGlobalData};
