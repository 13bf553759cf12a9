use oreboot_global_data::{config::SYS_MIPS_TIMER_FREQ, get_tbclk, set_timer_freq, timer_freq, ArchGlobalData};

#[test]
fn test_arch_global_data_defaults_to_board_timer() {
    let mut gd = ArchGlobalData::new();
    assert_eq!(gd.timer_freq(), SYS_MIPS_TIMER_FREQ);

    gd.set_timer_freq(25_000_000);
    assert_eq!(gd.timer_freq(), 25_000_000);
}

// the process-wide record is shared, so all of its checks live in one test
#[test]
fn test_global_timer_freq() {
    assert_eq!(timer_freq(), SYS_MIPS_TIMER_FREQ);
    assert_eq!(get_tbclk(), SYS_MIPS_TIMER_FREQ);

    set_timer_freq(440_000_000);
    assert_eq!(get_tbclk(), 440_000_000);

    set_timer_freq(SYS_MIPS_TIMER_FREQ);
}
