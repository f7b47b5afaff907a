//! `T0` record decoder: BROM execution time

use super::item;
use crate::record::MsgRecord;

/// Explain a boot time record
///
/// The bracketed field is the JTAG delay; the boot ROM only keeps its low
/// 16 bits, which is exactly what the field holds.
pub fn decode_t0(msg: &MsgRecord) -> Vec<String> {
    let mut out = vec![item(format!(
        "{} {}: BROM execution time: {} ms",
        msg.hi,
        msg.lo,
        msg.word()
    ))];

    if let Some(delay) = &msg.extra {
        out.push(item(format!(
            "{}: JTAG delay % 65536: {} ms",
            delay,
            delay.value()
        )));
    }

    out
}
