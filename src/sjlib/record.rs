use crate::sjlib::{InfoField, Result, SvjoinError};
use itertools::Itertools;

/// Minimum number of columns for a data line (CHROM through INFO)
pub const MIN_FIELDS: usize = 8;
pub const INFO_COL: usize = 7;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LineKind {
    /// `##` metadata
    Meta,
    /// `#CHROM` column names
    Columns,
    Data,
}

impl LineKind {
    pub fn of(line: &str) -> Self {
        if line.starts_with("##") {
            LineKind::Meta
        } else if line.starts_with('#') {
            LineKind::Columns
        } else {
            LineKind::Data
        }
    }
}

/// One tab-delimited data line split into its columns
#[derive(Debug, Clone)]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    pub fn parse(line: &str) -> Result<Self> {
        let fields: Vec<String> = line.split('\t').map(String::from).collect();
        if fields.len() < MIN_FIELDS {
            return Err(SvjoinError::malformed(
                line,
                format!("expected at least {} columns, found {}", MIN_FIELDS, fields.len()),
            ));
        }
        Ok(Self { fields })
    }

    pub fn chrom(&self) -> &str {
        &self.fields[0]
    }

    pub fn pos(&self) -> &str {
        &self.fields[1]
    }

    pub fn id(&self) -> &str {
        &self.fields[2]
    }

    pub fn ref_allele(&self) -> &str {
        &self.fields[3]
    }

    pub fn alt(&self) -> &str {
        &self.fields[4]
    }

    pub fn raw_info(&self) -> &str {
        &self.fields[INFO_COL]
    }

    pub fn info(&self) -> InfoField {
        InfoField::from_vcf(self.raw_info())
    }

    /// `chrom_pos_ref_alt`
    pub fn positional_key(&self) -> String {
        format!(
            "{}_{}_{}_{}",
            self.chrom(),
            self.pos(),
            self.ref_allele(),
            self.alt()
        )
    }

    /// Append `;`-joined annotation tokens. A missing INFO (`.`) is replaced
    /// instead so the output never carries `.;KEY=VAL`
    pub fn append_info(&mut self, annotation: &str) {
        if annotation.is_empty() {
            return;
        }
        let info = &mut self.fields[INFO_COL];
        if info.is_empty() || info.as_str() == "." {
            *info = annotation.to_string();
        } else {
            info.push(';');
            info.push_str(annotation);
        }
    }

    pub fn to_line(&self) -> String {
        self.fields.iter().join("\t")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: &str = "chr1\t100\trs1\tA\tT\t.\tPASS\tSVTYPE=INS;SVLEN=1";

    #[test]
    fn line_kinds() {
        assert_eq!(LineKind::of("##fileformat=VCFv4.2"), LineKind::Meta);
        assert_eq!(LineKind::of("#CHROM\tPOS"), LineKind::Columns);
        assert_eq!(LineKind::of(LINE), LineKind::Data);
    }

    #[test]
    fn columns() {
        let rec = Record::parse(LINE).unwrap();
        assert_eq!(rec.chrom(), "chr1");
        assert_eq!(rec.id(), "rs1");
        assert_eq!(rec.positional_key(), "chr1_100_A_T");
        assert_eq!(rec.info().value("SVTYPE"), Some("INS"));
    }

    #[test]
    fn too_few_columns() {
        let err = Record::parse("chr1\t100\trs1\tA\tT").unwrap_err();
        assert!(matches!(err, SvjoinError::MalformedRecord { .. }));
    }

    #[test]
    fn append_keeps_other_columns() {
        let mut rec = Record::parse(&format!("{}\tGT\t0/1", LINE)).unwrap();
        rec.append_info("COLORS_AC=5");
        assert_eq!(
            rec.to_line(),
            "chr1\t100\trs1\tA\tT\t.\tPASS\tSVTYPE=INS;SVLEN=1;COLORS_AC=5\tGT\t0/1"
        );
    }

    #[test]
    fn append_replaces_missing_info() {
        let mut rec = Record::parse("chr1\t100\t.\tA\tT\t.\t.\t.").unwrap();
        rec.append_info("COLORS_AC=0");
        assert_eq!(rec.raw_info(), "COLORS_AC=0");
    }
}
