/// Size of a virtual page in bytes (64 B)
pub const PAGE_SIZE: usize = 64;

/// Number of low address bits that form the page offset (log2 of PAGE_SIZE)
pub const PAGE_SHIFT: u32 = 6;

/// Mask selecting the offset bits of an address
pub const OFFSET_MASK: u64 = (PAGE_SIZE as u64) - 1;

/// Width of a trace address token in hex digits (i.e. 0x048 appears as "0048")
pub const ADDR_WIDTH: usize = 4;

/// Default number of frames in the simulated cache
pub const DEFAULT_FRAME_COUNT: usize = 5;
