//! Typed records extracted from matched log lines

use core::fmt;

use crate::error::{Error, Result};

/// Marker stored in the upper half of the USB DL mode word ("DL")
pub const USBDL_MODE_MARKER: u16 = 0x444C;

/// A captured hexadecimal token and its numeric value
///
/// The original digits are kept so they can be echoed back exactly as they
/// appeared in the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexField {
    text: String,
    value: u32,
}

impl HexField {
    /// Parse a captured token as a big-endian hex number
    pub fn parse(field: &'static str, text: &str) -> Result<Self> {
        let value = u32::from_str_radix(text, 16).map_err(|_| Error::InvalidHex {
            field,
            text: text.to_string(),
        })?;
        Ok(Self {
            text: text.to_string(),
            value,
        })
    }

    /// Digits as captured
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Numeric value
    pub fn value(&self) -> u32 {
        self.value
    }
}

impl fmt::Display for HexField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// USB download-mode configuration word
///
/// ```text
///  31            16 15               2  1  0
/// +----------------+------------------+--+--+
/// |  marker 0x444C |   timeout (s)    |  |EN|
/// +----------------+------------------+--+--+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsbDlMode(pub u32);

impl UsbDlMode {
    /// Upper 16 bits
    pub fn marker(self) -> u16 {
        (self.0 >> 16) as u16
    }

    /// Whether the upper half carries the "DL" marker
    pub fn marker_present(self) -> bool {
        self.marker() == USBDL_MODE_MARKER
    }

    /// Download-mode timeout in seconds (bits 2..=15)
    pub fn timeout_s(self) -> u16 {
        ((self.0 >> 2) & 0x3FFF) as u16
    }

    /// Download mode enabled (bit 0)
    pub fn enabled(self) -> bool {
        self.0 & 1 != 0
    }
}

/// `[DL]` record: USB download-mode settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DlRecord {
    /// USB DL timeout in milliseconds
    pub timeout_ms: HexField,
    /// USB DL mode word
    pub mode: HexField,
    /// Trailing byte, meaning unknown
    pub a: HexField,
    /// Trailing byte, meaning unknown
    pub b: HexField,
    /// Trailing byte, meaning unknown
    pub c: HexField,
}

impl DlRecord {
    /// Decoded mode word
    pub fn usbdl_mode(&self) -> UsbDlMode {
        UsbDlMode(self.mode.value())
    }
}

/// Message kind, selected by the two-character tag of a MSG record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MsgKind {
    /// `BP`: boot parameter flags and preloader offset
    BootParams,
    /// `T0`: BROM execution time and JTAG delay
    BootTime,
    /// Any other tag; echoed but not decoded
    Unrecognized(String),
}

impl MsgKind {
    /// Resolve a tag
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "BP" => MsgKind::BootParams,
            "T0" => MsgKind::BootTime,
            other => MsgKind::Unrecognized(other.to_string()),
        }
    }

    /// Tag as it appears in the log
    pub fn tag(&self) -> &str {
        match self {
            MsgKind::BootParams => "BP",
            MsgKind::BootTime => "T0",
            MsgKind::Unrecognized(tag) => tag,
        }
    }
}

/// `TT: XXXX YYYY [ZZZZ]` record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgRecord {
    /// Message kind
    pub kind: MsgKind,
    /// High half of the 32-bit value
    pub hi: HexField,
    /// Low half of the 32-bit value
    pub lo: HexField,
    /// Optional bracketed field
    pub extra: Option<HexField>,
}

impl MsgRecord {
    /// `hi` and `lo` combined into one 32-bit word
    pub fn word(&self) -> u32 {
        (self.hi.value() << 16) | self.lo.value()
    }
}

/// Any record recognized in a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// `[DL]` record
    Dl(DlRecord),
    /// Two-letter message record
    Msg(MsgRecord),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(text: &str) -> HexField {
        HexField::parse("test", text).unwrap()
    }

    #[test]
    fn test_hex_field_keeps_text() {
        let f = hex("00000BB8");
        assert_eq!(f.text(), "00000BB8");
        assert_eq!(f.value(), 3000);
        assert_eq!(f.to_string(), "00000BB8");
    }

    #[test]
    fn test_hex_field_rejects_garbage() {
        let err = HexField::parse("x", "12G4").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidHex {
                field: "x",
                text: "12G4".to_string()
            }
        );
    }

    #[test]
    fn test_usbdl_mode_fields() {
        let mode = UsbDlMode(0x444C_0D05);
        assert_eq!(mode.marker(), 0x444C);
        assert!(mode.marker_present());
        assert_eq!(mode.timeout_s(), 0x0D05 >> 2);
        assert!(mode.enabled());

        let mode = UsbDlMode(0x444D_FFFE);
        assert!(!mode.marker_present());
        assert_eq!(mode.timeout_s(), 0x3FFF);
        assert!(!mode.enabled());
    }

    #[test]
    fn test_usbdl_mode_marker_only() {
        let mode = UsbDlMode(0x444C_0000);
        assert!(mode.marker_present());
        assert_eq!(mode.timeout_s(), 0);
        assert!(!mode.enabled());
    }

    #[test]
    fn test_dl_record_fields() {
        let rec = DlRecord {
            timeout_ms: hex("00000BB8"),
            mode: hex("444C0051"),
            a: hex("01"),
            b: hex("02"),
            c: hex("03"),
        };
        assert_eq!(rec.timeout_ms.value(), 3000);
        assert_eq!(rec.mode.text(), "444C0051");
        let mode = rec.usbdl_mode();
        assert_eq!(mode, UsbDlMode(0x444C_0051));
        assert!(mode.marker_present());
        assert_eq!(mode.timeout_s(), 20);
        assert!(mode.enabled());
    }

    #[test]
    fn test_msg_kind_tags() {
        assert_eq!(MsgKind::from_tag("BP"), MsgKind::BootParams);
        assert_eq!(MsgKind::from_tag("T0"), MsgKind::BootTime);
        assert_eq!(
            MsgKind::from_tag("ZZ"),
            MsgKind::Unrecognized("ZZ".to_string())
        );
        for tag in ["BP", "T0", "ZZ"] {
            assert_eq!(MsgKind::from_tag(tag).tag(), tag);
        }
    }

    #[test]
    fn test_msg_word() {
        let rec = MsgRecord {
            kind: MsgKind::BootTime,
            hi: hex("0001"),
            lo: hex("0000"),
            extra: None,
        };
        assert_eq!(rec.word(), 65536);

        let rec = MsgRecord {
            hi: hex("FFFF"),
            lo: hex("FFFF"),
            ..rec
        };
        assert_eq!(rec.word(), u32::MAX);
    }
}
