//! Field decoders
//!
//! Each decoder turns a typed record into the explanation lines printed
//! under the echoed log text. First-level lines start with ` - `,
//! second-level lines with `   - `.
//!
//! MSG records are routed by [`MsgKind`]; unrecognized kinds produce no
//! explanation at all.

mod bp;
mod dl;
mod t0;

pub use bp::decode_bp;
pub use dl::decode_dl;
pub use t0::decode_t0;

use crate::record::{MsgKind, MsgRecord, Record};

/// Size of one preloader offset unit in bytes
pub const PRELOADER_BLOCK_SIZE: u64 = 2048;

pub(crate) fn item(text: impl AsRef<str>) -> String {
    format!(" - {}", text.as_ref())
}

pub(crate) fn sub_item(text: impl AsRef<str>) -> String {
    format!("   - {}", text.as_ref())
}

/// Explanation lines for any record
pub fn describe(record: &Record) -> Vec<String> {
    match record {
        Record::Dl(dl) => decode_dl(dl),
        Record::Msg(msg) => decode_msg(msg),
    }
}

/// Dispatch a MSG record on its kind
pub fn decode_msg(msg: &MsgRecord) -> Vec<String> {
    match &msg.kind {
        MsgKind::BootParams => decode_bp(msg),
        MsgKind::BootTime => decode_t0(msg),
        MsgKind::Unrecognized(tag) => {
            log::debug!("No decoder for message type {:?}", tag);
            Vec::new()
        }
    }
}
