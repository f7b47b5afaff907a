//! Line classification
//!
//! A line is searched for each [`Shape`] in order; the first shape found
//! anywhere in the line wins. Lines that contain no known shape are
//! ignored.

use regex::Captures;

use crate::decode;
use crate::error::{Error, Result};
use crate::pattern::{group, Shape};
use crate::record::{DlRecord, HexField, MsgKind, MsgRecord, Record};

/// A record found in a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified<'a> {
    /// Exact text of the line that matched
    pub matched: &'a str,
    /// Byte offset of the match within the line
    pub start: usize,
    /// Decoded record
    pub record: Record,
}

fn field(caps: &Captures<'_>, name: &'static str) -> Result<HexField> {
    let m = caps.name(name).ok_or(Error::MissingField(name))?;
    HexField::parse(name, m.as_str())
}

fn dl_record(caps: &Captures<'_>) -> Result<Record> {
    Ok(Record::Dl(DlRecord {
        timeout_ms: field(caps, group::X)?,
        mode: field(caps, group::Y)?,
        a: field(caps, group::A)?,
        b: field(caps, group::B)?,
        c: field(caps, group::C)?,
    }))
}

fn msg_record(caps: &Captures<'_>) -> Result<Record> {
    let tag = caps
        .name(group::TYPE)
        .ok_or(Error::MissingField(group::TYPE))?;
    let extra = match caps.name(group::Z) {
        Some(z) => Some(HexField::parse(group::Z, z.as_str())?),
        None => None,
    };

    Ok(Record::Msg(MsgRecord {
        kind: MsgKind::from_tag(tag.as_str()),
        hi: field(caps, group::X)?,
        lo: field(caps, group::Y)?,
        extra,
    }))
}

/// Find the first known record in `line`
///
/// Returns `Ok(None)` when no shape matches.
pub fn classify(line: &str) -> Result<Option<Classified<'_>>> {
    for shape in Shape::ALL {
        let Some(caps) = shape.regex().captures(line) else {
            continue;
        };
        // Group 0 is always present on a successful match
        let Some(whole) = caps.get(0) else {
            continue;
        };

        let record = match shape {
            Shape::Dl => dl_record(&caps)?,
            Shape::Msg => msg_record(&caps)?,
        };
        log::trace!("{:?} record at {}: {:?}", shape, whole.start(), record);

        return Ok(Some(Classified {
            matched: whole.as_str(),
            start: whole.start(),
            record,
        }));
    }

    Ok(None)
}

/// Classify and decode one line
///
/// The output is the matched text followed by its explanation lines, or
/// nothing if the line holds no known record.
pub fn decode_line(line: &str) -> Result<Vec<String>> {
    let Some(found) = classify(line)? else {
        return Ok(Vec::new());
    };

    let mut out = vec![found.matched.to_string()];
    out.extend(decode::describe(&found.record));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_match_yields_nothing() {
        assert!(classify("Hello from the preloader").unwrap().is_none());
        assert!(decode_line("").unwrap().is_empty());
        assert!(decode_line("[DL] 1234").unwrap().is_empty());
    }

    #[test]
    fn test_dl_line() {
        let out = decode_line("[DL] 00000BB8 444C0051 010203\r").unwrap();
        assert_eq!(out.len(), 9);
        assert_eq!(out[0], "[DL] 00000BB8 444C0051 010203");
        assert_eq!(out[1], " - 00000BB8: USB DL timeout: 3000 ms");
        assert_eq!(out[3], "   - Flag: Present");
        assert_eq!(out[6], " - 01");
        assert_eq!(out[8], " - 03");
    }

    #[test]
    fn test_match_inside_line() {
        let found = classify("[0012] BP: 0000 000B [0001] done").unwrap().unwrap();
        assert_eq!(found.matched, "BP: 0000 000B [0001]");
        assert_eq!(found.start, 7);
        match found.record {
            Record::Msg(ref msg) => {
                assert_eq!(msg.kind, MsgKind::BootParams);
                assert_eq!(msg.word(), 0x0000_000B);
                assert_eq!(msg.extra.as_ref().map(|z| z.value()), Some(1));
            }
            ref other => panic!("unexpected record {:?}", other),
        }
    }

    #[test]
    fn test_bp_line() {
        let out = decode_line("BP: 0000 000B [0001]").unwrap();
        assert_eq!(
            out,
            vec![
                "BP: 0000 000B [0001]",
                " - 0000 000B: Flags",
                "   - Preloader found on boot medium.",
                "   - USB synced for DL mode.",
                "   - JTAG is disabled.",
                " - 0001: Preloader offset: 2048 bytes",
            ]
        );
    }

    #[test]
    fn test_bp_line_without_offset() {
        let out = decode_line("BP: 0000 0001").unwrap();
        assert_eq!(
            out,
            vec![
                "BP: 0000 0001",
                " - 0000 0001: Flags",
                "   - Preloader found on boot medium.",
            ]
        );
    }

    #[test]
    fn test_t0_line() {
        let out = decode_line("T0: 0001 0000 [0032]").unwrap();
        assert_eq!(
            out,
            vec![
                "T0: 0001 0000 [0032]",
                " - 0001 0000: BROM execution time: 65536 ms",
                " - 0032: JTAG delay % 65536: 50 ms",
            ]
        );
    }

    #[test]
    fn test_unrecognized_tag_echo_only() {
        let out = decode_line("ZZ: 1234 5678 [9ABC]").unwrap();
        assert_eq!(out, vec!["ZZ: 1234 5678 [9ABC]"]);
    }

    #[test]
    fn test_dl_wins_over_msg() {
        // Both shapes occur; DL is tried first even though MSG appears earlier
        let found = classify("T0: 0000 0001 [DL] 00000000 444C0000 000000")
            .unwrap()
            .unwrap();
        assert!(matches!(found.record, Record::Dl(_)));
        assert_eq!(found.matched, "[DL] 00000000 444C0000 000000");
    }

    #[test]
    fn test_first_msg_in_line_wins() {
        let found = classify("T0: 0000 0001 BP: FFFF FFFF").unwrap().unwrap();
        assert_eq!(found.matched, "T0: 0000 0001");
    }
}
