use oreboot_global_data::{config::SYS_MIPS_TIMER_FREQ, get_tbclk, set_timer_freq};
use oreboot_soc::mediatek::{
    clk::{mt7621::*, MHz},
    cpuinfo::{boot_device, print_cpuinfo, CpuInfo, SYSCTL_CHIP_REV_ID_REG},
};

const CPU_ID: u32 = 1 << 17;
const PKG_ID: u32 = 1 << 16;
const DRAM_TYPE_DDR2: u32 = 1 << 4;

fn rev_id(ver: u32, eco: u32) -> u32 {
    (ver << 8) | eco
}

/// sysc and memc windows of an MT7621A with a 40 MHz crystal, 880 MHz CPU
/// and DDR3-1200
struct Board {
    sysc: Vec<u32>,
    memc: Vec<u32>,
}

impl Board {
    fn new(rev: u32, syscfg0: u32) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut sysc = vec![0u32; SYSC_MAP_SIZE / 4];
        let mut memc = vec![0u32; MEMC_MAP_SIZE / 4];

        sysc[SYSCTL_CHIP_REV_ID_REG / 4] = rev;
        sysc[SYSCFG0_REG / 4] = syscfg0 | (3 << 6);
        sysc[CLKCFG0_REG / 4] = 1 << 30;
        sysc[CUR_CLK_STS_REG / 4] = (1 << 8) | 1;
        memc[MEMPLL18_REG / 4] = (1 << 12) | (43 << 4);
        memc[MEMPLL6_REG / 4] = (1 << 12) | (30 << 4);
        memc[MEMPLL1_REG / 4] = 1 << 1;

        Self { sysc, memc }
    }

    fn sysc_base(&mut self) -> usize {
        self.sysc.as_mut_ptr() as usize
    }

    fn clk(&mut self) -> Mt7621Clk {
        Mt7621Clk::new(self.sysc_base(), self.memc.as_mut_ptr() as usize)
    }

    fn cpuinfo(&mut self) -> CpuInfo {
        let clk = self.clk();
        CpuInfo::new(self.sysc_base(), &clk)
    }
}

#[test]
fn test_boot_devices() {
    assert_eq!(boot_device(1), Some("NAND 2K+64"));
    assert_eq!(boot_device(2), Some("SPI-NOR 3-Byte Addr"));
    assert_eq!(boot_device(3), Some("SPI-NOR 4-Byte Addr"));
    assert_eq!(boot_device(10), Some("NAND 2K+128"));
    assert_eq!(boot_device(11), Some("NAND 4K+128"));
    assert_eq!(boot_device(12), Some("NAND 4K+256"));
    assert_eq!(boot_device(0), None);
    assert_eq!(boot_device(4), None);
    assert_eq!(boot_device(15), None);
}

#[test]
fn test_banner() {
    let mut board = Board::new(CPU_ID | PKG_ID | rev_id(1, 3), 2);
    let info = board.cpuinfo();

    assert_eq!(
        format!("{}", info),
        "CPU:   MediaTek MT7621A ver 1, eco 3\n\
         Boot:  DDR3, SPI-NOR 3-Byte Addr\n\
         Clock: CPU: 880MHz, DDR: 1200MT/s, Bus: 220MHz, XTAL: 40MHz"
    );
    assert_eq!(info.timer_freq(), 440 * MHz);
}

#[test]
fn test_variants() {
    let mut board = Board::new(CPU_ID | rev_id(1, 4), DRAM_TYPE_DDR2 | 12);
    let info = board.cpuinfo();
    assert_eq!(info.variant(), 'N');
    assert_eq!(info.ver(), 1);
    assert_eq!(info.eco(), 4);
    assert_eq!(info.dram(), 2);
    assert_eq!(info.boot_device(), "NAND 4K+256");

    // single core parts report 'S' whatever the package bit says
    for rev in [PKG_ID | rev_id(1, 3), rev_id(1, 3)] {
        let mut board = Board::new(rev, 0);
        let info = board.cpuinfo();
        assert_eq!(info.variant(), 'S');
        assert_eq!(info.boot_device(), "Unsupported boot mode");
    }
}

// the timer frequency is process wide, so all of its checks live in one test
#[test]
fn test_print_cpuinfo_seeds_timer() {
    assert_eq!(get_tbclk(), SYS_MIPS_TIMER_FREQ);

    // a zero post divider leaves no counter rate, keep the default
    let mut board = Board::new(CPU_ID | PKG_ID, 2);
    board.sysc[CUR_CLK_STS_REG / 4] = 1;
    let sysc = board.sysc_base();
    let clk = board.clk();
    let info = print_cpuinfo(sysc, &clk);
    assert_eq!(info.timer_freq(), 0);
    assert_eq!(get_tbclk(), SYS_MIPS_TIMER_FREQ);

    // 880 MHz / 4 post divide, counter at half the CPU rate
    let mut board = Board::new(CPU_ID | PKG_ID, 2);
    board.sysc[CUR_CLK_STS_REG / 4] = (4 << 8) | 1;
    let sysc = board.sysc_base();
    let clk = board.clk();
    print_cpuinfo(sysc, &clk);
    assert_eq!(get_tbclk(), 110 * MHz);

    set_timer_freq(SYS_MIPS_TIMER_FREQ);
}
