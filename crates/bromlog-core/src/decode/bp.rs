//! `BP` record decoder: boot status flags and preloader offset

use super::{item, sub_item, PRELOADER_BLOCK_SIZE};
use crate::flags::{describe_word, BootFlags};
use crate::record::MsgRecord;

/// Explain a boot parameter record
///
/// One line per set flag bit, lowest bit first, followed by the preloader
/// offset when the bracketed field is present.
pub fn decode_bp(msg: &MsgRecord) -> Vec<String> {
    let flags = msg.word();

    let unknown = BootFlags::unknown_bits(flags);
    if unknown != 0 {
        log::debug!("BP flags 0x{:08X} carry unknown bits 0x{:08X}", flags, unknown);
    }

    let mut out = Vec::with_capacity(2 + flags.count_ones() as usize);
    out.push(item(format!("{} {}: Flags", msg.hi, msg.lo)));
    out.extend(describe_word(flags).map(sub_item));

    if let Some(offset) = &msg.extra {
        out.push(item(format!(
            "{}: Preloader offset: {} bytes",
            offset,
            u64::from(offset.value()) * PRELOADER_BLOCK_SIZE
        )));
    }

    out
}
