//! Boot parameter ("BP") status flags
//!
//! The boot ROM reports a 32-bit flag word describing what it found on the
//! boot medium and how the download-mode handshake went. Only some bits have
//! a known meaning; all others are reported as `"Unknown."`.

use bitflags::bitflags;

bitflags! {
    /// Status flags reported in a BP record
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BootFlags: u32 {
        /// Preloader found on boot medium
        const PRELOADER_FOUND     = 1 << 0;
        /// USB synced for DL mode
        const USB_SYNCED          = 1 << 1;
        /// JTAG is disabled
        const JTAG_DISABLED       = 1 << 3;
        /// USB failed to sync for DL mode
        const USB_SYNC_FAILED     = 1 << 4;
        /// UART synced for DL mode
        const UART_SYNCED         = 1 << 5;
        /// UART failed to sync for DL mode
        const UART_SYNC_FAILED    = 1 << 6;
        /// Preloader offset is non-zero
        const PRELOADER_OFFSET    = 1 << 7;
        /// SEJ_CON1 bits [11:8] are not clear
        const SEJ_CON1_SET        = 1 << 9;
        /// Preloader on boot medium is 64-bit
        const PRELOADER_64BIT     = 1 << 26;
        /// USB DL high speed enabled
        const USB_DL_HS           = 1 << 27;

        // M_SW_RES / gfh_brom_cfg software reset bits
        /// gfh_brom_cfg reserved bits set, or M_SW_RES bit 6
        const BROM_CFG_RESERVED   = 1 << 28;
        /// M_SW_RES bit 5
        const SW_RES_BIT5         = 1 << 29;
        /// M_SW_RES bit 4
        const SW_RES_BIT4         = 1 << 30;
        /// M_SW_RES bit 3
        const SW_RES_BIT3         = 1 << 31;
    }
}

impl Default for BootFlags {
    fn default() -> Self {
        BootFlags::empty()
    }
}

/// Description used for set bits with no table entry
pub const UNKNOWN_BIT: &str = "Unknown.";

/// Known flag bits and their descriptions, in ascending bit order.
///
/// The strings are printed verbatim and must not change.
pub static BIT_DESCRIPTIONS: &[(BootFlags, &str)] = &[
    (BootFlags::PRELOADER_FOUND, "Preloader found on boot medium."),
    (BootFlags::USB_SYNCED, "USB synced for DL mode."),
    (BootFlags::JTAG_DISABLED, "JTAG is disabled."),
    (BootFlags::USB_SYNC_FAILED, "USB failed to sync for DL mode."),
    (BootFlags::UART_SYNCED, "UART synced for DL mode."),
    (BootFlags::UART_SYNC_FAILED, "UART failed to sync for DL mode."),
    (BootFlags::PRELOADER_OFFSET, "Preloader offset is non-zero."),
    (
        BootFlags::SEJ_CON1_SET,
        "SEJ + 0xc0 (SEJ_CON1) bits [11:8] are not clear.",
    ),
    (BootFlags::PRELOADER_64BIT, "Preloader on boot medium is 64-bit."),
    (BootFlags::USB_DL_HS, "USB DL HS (High Speed?) enabled."),
    (
        BootFlags::BROM_CFG_RESERVED,
        "gfh_brom_cfg.gfh_brom_cfg_v3.reserved3 bit 0 and gfh_brom_cfg.gfh_brom_cfg_v3.flags.reserved1 are set: or M_SW_RES bit 6 is set.",
    ),
    (BootFlags::SW_RES_BIT5, "M_SW_RES bit 5 set."),
    (BootFlags::SW_RES_BIT4, "M_SW_RES bit 4 set."),
    (BootFlags::SW_RES_BIT3, "M_SW_RES bit 3 set."),
];

/// Look up the description of a single-bit mask
///
/// Masks without a table entry (including masks with more than one bit
/// set) describe as [`UNKNOWN_BIT`].
pub fn describe_bit(mask: u32) -> &'static str {
    BIT_DESCRIPTIONS
        .iter()
        .find(|(flag, _)| flag.bits() == mask)
        .map(|(_, desc)| *desc)
        .unwrap_or(UNKNOWN_BIT)
}

/// Iterate over the single-bit masks set in `word`, lowest bit first
pub fn set_bits(word: u32) -> impl Iterator<Item = u32> {
    (0..u32::BITS)
        .map(|bit| 1u32 << bit)
        .filter(move |mask| word & mask != 0)
}

/// Describe every set bit of `word`, lowest bit first
///
/// Each unmapped bit yields its own `"Unknown."` entry.
pub fn describe_word(word: u32) -> impl Iterator<Item = &'static str> {
    set_bits(word).map(describe_bit)
}

impl BootFlags {
    /// Bits of `word` that have no known meaning
    pub fn unknown_bits(word: u32) -> u32 {
        word & !BootFlags::all().bits()
    }
}
