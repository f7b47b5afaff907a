//! `[DL]` record decoder

use super::{item, sub_item};
use crate::record::DlRecord;

/// Explain a USB download-mode settings record
///
/// The trailing `a`, `b` and `c` bytes have no documented meaning and are
/// echoed as captured.
pub fn decode_dl(rec: &DlRecord) -> Vec<String> {
    let mode = rec.usbdl_mode();

    vec![
        item(format!(
            "{}: USB DL timeout: {} ms",
            rec.timeout_ms,
            rec.timeout_ms.value()
        )),
        item(format!("{}: USB DL mode", rec.mode)),
        sub_item(format!(
            "Flag: {}",
            if mode.marker_present() {
                "Present"
            } else {
                "Absent"
            }
        )),
        sub_item(format!("Timeout: {} s", mode.timeout_s())),
        sub_item(format!(
            "Enabled: {}",
            if mode.enabled() { "True" } else { "False" }
        )),
        item(rec.a.text()),
        item(rec.b.text()),
        item(rec.c.text()),
    ]
}
