use crate::sjlib::{
    open_output, open_vcf, write_line, AddSampleArgs, LineKind, Result, VcfLines,
};
use std::io::{BufRead, Write};

pub const GT_FORMAT_LINE: &str =
    "##FORMAT=<ID=GT,Number=1,Type=String,Description=\"Genotype\">";
const FORMAT_CODE: &str = "GT";
const MISSING_GT: &str = "./.";

/// Give a sites-only vcf a FORMAT column and one sample column holding a
/// missing genotype. Returns the number of records written.
pub fn add_sample_columns<R: BufRead, W: Write + ?Sized>(
    reader: R,
    writer: &mut W,
    sample: &str,
) -> Result<u64> {
    let mut n_records = 0;
    for entry in VcfLines::new(reader) {
        let (kind, line) = entry?;
        match kind {
            LineKind::Meta => write_line(writer, &line)?,
            LineKind::Columns => {
                write_line(writer, GT_FORMAT_LINE)?;
                write_line(writer, &format!("{}\tFORMAT\t{}", line, sample))?;
            }
            LineKind::Data => {
                let filled = format!("{}\t{}\t{}", line, FORMAT_CODE, MISSING_GT);
                write_line(writer, &filled)?;
                n_records += 1;
            }
        }
    }
    Ok(n_records)
}

pub fn add_sample_main(args: AddSampleArgs) -> Result<()> {
    let reader = open_vcf(&args.input)?;
    let mut writer = open_output(&args.output)?;
    let n_records = add_sample_columns(reader, &mut writer, &args.sample)?;
    writer.flush()?;
    info!("added {} column to {} records", args.sample, n_records);
    Ok(())
}
