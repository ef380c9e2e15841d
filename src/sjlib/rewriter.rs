use crate::sjlib::{
    write_line, AnnotationMap, JoinKey, LineKind, Record, Result, SvjoinError, VcfLines,
};
use std::io::{BufRead, Write};

/// Decides whether a target record is expected to have a reference match
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlapPolicy {
    /// Every record must match (truvari tp-comp)
    Always,
    /// No record matches (truvari fp)
    Never,
    /// Read a jasmine support vector from this INFO key
    SupportVector(String),
}

impl OverlapPolicy {
    pub fn supp_vec() -> Self {
        OverlapPolicy::SupportVector("SUPP_VEC".to_string())
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Overlap {
    Expected,
    None,
    /// Only the reference carries this variant
    ReferenceOnly,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RewriteStats {
    pub matched: u64,
    pub defaulted: u64,
    pub skipped: u64,
}

impl RewriteStats {
    pub fn written(&self) -> u64 {
        self.matched + self.defaulted
    }
}

/// Streams target records, attaching reference annotations to each
pub struct Rewriter<'a> {
    map: &'a AnnotationMap,
    key: JoinKey,
    policy: OverlapPolicy,
    copy_header: bool,
    header_written: bool,
    pub stats: RewriteStats,
}

impl<'a> Rewriter<'a> {
    pub fn new(map: &'a AnnotationMap, key: JoinKey, policy: OverlapPolicy) -> Self {
        Self {
            map,
            key,
            policy,
            copy_header: true,
            header_written: false,
            stats: RewriteStats::default(),
        }
    }

    /// Drop every header line, for appending records to an output that
    /// already has its header
    pub fn data_only(mut self) -> Self {
        self.copy_header = false;
        self
    }

    fn classify(&self, record: &Record, line: &str) -> Result<Overlap> {
        match &self.policy {
            OverlapPolicy::Always => Ok(Overlap::Expected),
            OverlapPolicy::Never => Ok(Overlap::None),
            OverlapPolicy::SupportVector(key) => {
                let info = record.info();
                let supp = info.value(key).ok_or_else(|| SvjoinError::MissingInfoKey {
                    key: key.clone(),
                    record: line.to_string(),
                })?;
                match supp {
                    "11" => Ok(Overlap::Expected),
                    "10" => Ok(Overlap::None),
                    "01" => Ok(Overlap::ReferenceOnly),
                    other => Err(SvjoinError::malformed(
                        line,
                        format!("unexpected {} value {}", key, other),
                    )),
                }
            }
        }
    }

    /// Annotate a single data line. Returns `None` for reference-only
    /// records, which are not carried into the output.
    pub fn rewrite_record(&mut self, line: &str) -> Result<Option<String>> {
        let mut record = Record::parse(line)?;
        match self.classify(&record, line)? {
            Overlap::Expected => {
                let key = self.key.extract(&record)?;
                record.append_info(self.map.lookup(&key)?);
                self.stats.matched += 1;
            }
            Overlap::None => {
                record.append_info(self.map.default_block());
                self.stats.defaulted += 1;
            }
            Overlap::ReferenceOnly => {
                self.stats.skipped += 1;
                return Ok(None);
            }
        }
        Ok(Some(record.to_line()))
    }

    pub fn rewrite<R: BufRead, W: Write + ?Sized>(
        &mut self,
        reader: R,
        writer: &mut W,
    ) -> Result<()> {
        for entry in VcfLines::new(reader) {
            let (kind, line) = entry?;
            match kind {
                LineKind::Meta => {
                    if self.copy_header {
                        write_line(writer, &line)?;
                    }
                }
                LineKind::Columns => {
                    if !self.copy_header {
                        continue;
                    }
                    if !self.header_written {
                        for h in self.map.header() {
                            write_line(writer, h)?;
                        }
                        self.header_written = true;
                    }
                    write_line(writer, &line)?;
                }
                LineKind::Data => {
                    if let Some(out) = self.rewrite_record(&line)? {
                        write_line(writer, &out)?;
                    }
                }
            }
        }
        Ok(())
    }
}
