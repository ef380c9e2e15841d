use crate::sjlib::{LineKind, Result};
use rust_htslib::bgzf;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Open a vcf for line reading. htslib sniffs the compression, so plain,
/// gzip and bgzf inputs all work.
pub fn open_vcf(path: &Path) -> Result<Box<dyn BufRead>> {
    debug!("opening {}", path.display());
    let reader = bgzf::Reader::from_path(path)?;
    Ok(Box::new(BufReader::with_capacity(page_size::get() * 16, reader)))
}

/// Iterates the lines of a vcf tagged with their kind. Line terminators
/// (`\n` or `\r\n`) are stripped.
pub struct VcfLines<R: BufRead> {
    reader: R,
    buffer: String,
    pub line_count: u64,
}

impl<R: BufRead> VcfLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::new(),
            line_count: 0,
        }
    }
}

impl<R: BufRead> Iterator for VcfLines<R> {
    type Item = Result<(LineKind, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buffer.clear();
        match self.reader.read_line(&mut self.buffer) {
            Ok(0) => None,
            Err(e) => Some(Err(e.into())),
            Ok(_) => {
                self.line_count += 1;
                let line = self
                    .buffer
                    .trim_end_matches(|c: char| c == '\n' || c == '\r')
                    .to_string();
                Some(Ok((LineKind::of(&line), line)))
            }
        }
    }
}
