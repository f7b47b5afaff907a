//! Read log sources line by line and write decoded records

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// An input log
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl Source {
    /// `-` names standard input
    pub fn from_arg(path: &Path) -> Self {
        if path.as_os_str() == "-" {
            Source::Stdin
        } else {
            Source::File(path.to_path_buf())
        }
    }

    /// Sources named on the command line, or stdin if there are none
    pub fn from_args(files: &[PathBuf]) -> Vec<Self> {
        if files.is_empty() {
            vec![Source::Stdin]
        } else {
            files.iter().map(|p| Source::from_arg(p)).collect()
        }
    }

    /// Name used in messages
    pub fn name(&self) -> String {
        match self {
            Source::Stdin => "<stdin>".to_string(),
            Source::File(path) => path.display().to_string(),
        }
    }
}

/// Line counts for one source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Lines read
    pub lines: usize,
    /// Lines holding a known record
    pub matched: usize,
}

/// Decode every line of `reader`, writing results to `out`
///
/// `\n`, `\r\n` and a bare `\r` all end a line. Input that is not valid
/// UTF-8 is converted lossily so the rest of the line can still be scanned.
pub fn decode_reader<R: BufRead, W: Write>(name: &str, mut reader: R, out: &mut W) -> Result<Stats> {
    let mut stats = Stats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let n = reader.read_until(b'\n', &mut buf).map_err(|source| Error::Read {
            name: name.to_string(),
            source,
        })?;
        if n == 0 {
            break;
        }

        let raw = String::from_utf8_lossy(&buf);
        let chunk: &str = &raw;
        let chunk = chunk.strip_suffix('\n').unwrap_or(chunk);
        let chunk = chunk.strip_suffix('\r').unwrap_or(chunk);

        for line in chunk.split('\r') {
            stats.lines += 1;

            let decoded = bromlog_core::decode_line(line).map_err(|source| Error::Decode {
                name: name.to_string(),
                line: stats.lines,
                source,
            })?;
            if decoded.is_empty() {
                continue;
            }
            stats.matched += 1;

            for text in &decoded {
                writeln!(out, "{}", text).map_err(Error::Write)?;
            }
        }
    }

    Ok(stats)
}

/// Decode one source
pub fn decode_source<W: Write>(source: &Source, out: &mut W) -> Result<Stats> {
    let name = source.name();
    let stats = match source {
        Source::Stdin => {
            let stdin = io::stdin();
            decode_reader(&name, stdin.lock(), out)?
        }
        Source::File(path) => {
            let file = File::open(path).map_err(|source| Error::Open {
                path: path.clone(),
                source,
            })?;
            decode_reader(&name, BufReader::new(file), out)?
        }
    };

    log::debug!(
        "{}: {} lines, {} records",
        name,
        stats.lines,
        stats.matched
    );
    Ok(stats)
}

/// Decode all sources in order
pub fn run<W: Write>(sources: &[Source], out: &mut W) -> Result<()> {
    for source in sources {
        decode_source(source, out)?;
        out.flush().map_err(Error::Write)?;
    }
    Ok(())
}
