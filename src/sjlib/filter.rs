use crate::sjlib::{
    open_output, open_vcf, write_line, FilterArgs, LineKind, Record, Result, VcfLines,
};
use std::collections::HashSet;
use std::io::{BufRead, Write};

/// `chrom_pos_ref_alt` of every reference record
#[derive(Debug, Default)]
pub struct PositionalSet {
    keys: HashSet<String>,
}

impl PositionalSet {
    pub fn read<R: BufRead>(reader: R) -> Result<Self> {
        let mut keys = HashSet::new();
        for entry in VcfLines::new(reader) {
            let (kind, line) = entry?;
            if kind == LineKind::Data {
                keys.insert(Record::parse(&line)?.positional_key());
            }
        }
        Ok(Self { keys })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FilterCounts {
    pub kept: u64,
    pub filtered: u64,
}

/// Copy `reader` to `writer` leaving out records found in `reference`.
/// Header lines are passed through.
pub fn filter_known<R: BufRead, W: Write + ?Sized>(
    reader: R,
    writer: &mut W,
    reference: &PositionalSet,
) -> Result<FilterCounts> {
    let mut counts = FilterCounts::default();
    for entry in VcfLines::new(reader) {
        let (kind, line) = entry?;
        if kind != LineKind::Data {
            write_line(writer, &line)?;
            continue;
        }
        let key = Record::parse(&line)?.positional_key();
        if reference.contains(&key) {
            counts.filtered += 1;
        } else {
            write_line(writer, &line)?;
            counts.kept += 1;
        }
    }
    Ok(counts)
}

pub fn filter_main(args: FilterArgs) -> Result<FilterCounts> {
    let reference = PositionalSet::read(open_vcf(&args.colors)?)?;
    info!("{} reference variants", reference.len());

    let mut writer = open_output(&args.output_vcf)?;
    let counts = filter_known(open_vcf(&args.input_vcf)?, &mut writer, &reference)?;
    writer.flush()?;

    info!("kept {} filtered {}", counts.kept, counts.filtered);
    Ok(counts)
}
