/// Driver classes known to the driver model
///
/// Only the classes that oreboot binds drivers for are listed; the numbering
/// is local to oreboot.
#[repr(C)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClassId {
	/* Used internally by driver model */
	Root = 0,

	Clk,		/* Clock source, e.g. used by peripherals */
	Memory,		/* Memory Controller device */
	Syscon,		/* System configuration device */
	Count,
	Invalid = -1,
}
