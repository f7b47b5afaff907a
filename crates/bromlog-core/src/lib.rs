//! bromlog-core - Decoding engine for boot ROM download-mode logs
//!
//! The boot ROM prints short diagnostic records while it waits for a USB
//! download-mode handshake. Each record is a handful of fixed-width
//! hexadecimal tokens carrying timeouts, a USB DL mode word, a 32-bit
//! status flag word, the BROM execution time and the preloader offset.
//!
//! This crate recognizes those records inside arbitrary log lines and turns
//! them into human-readable explanations. It performs no I/O.
//!
//! # Example
//!
//! ```
//! use bromlog_core::decode_line;
//!
//! let out = decode_line("T0: 0001 0000 [0010]").unwrap();
//! assert_eq!(out[0], "T0: 0001 0000 [0010]");
//! assert_eq!(out[1], " - 0001 0000: BROM execution time: 65536 ms");
//! assert_eq!(out[2], " - 0010: JTAG delay % 65536: 16 ms");
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod classify;
pub mod decode;
pub mod error;
pub mod flags;
pub mod pattern;
pub mod record;

pub use classify::{classify, decode_line, Classified};
pub use error::{Error, Result};
pub use flags::{describe_bit, BootFlags};
pub use record::{DlRecord, HexField, MsgKind, MsgRecord, Record, UsbDlMode};
