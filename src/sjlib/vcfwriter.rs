use crate::sjlib::Result;
use rust_htslib::bgzf;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Output destination. `.gz` paths are bgzf compressed, other paths are
/// plain text and no path means stdout.
pub fn open_output(out_path: &Option<PathBuf>) -> Result<Box<dyn Write>> {
    let m_page = page_size::get() * 500;
    let writer: Box<dyn Write> = match out_path {
        Some(path) if path.extension().is_some_and(|e| e == "gz") => {
            debug!("writing bgzf to {}", path.display());
            Box::new(BufWriter::with_capacity(m_page, bgzf::Writer::from_path(path)?))
        }
        Some(path) => Box::new(BufWriter::with_capacity(m_page, File::create(path)?)),
        None => Box::new(BufWriter::new(std::io::stdout())),
    };
    Ok(writer)
}

/// Write a line and its terminator
pub fn write_line<W: Write + ?Sized>(writer: &mut W, line: &str) -> Result<()> {
    writer.write_all(line.as_bytes())?;
    writer.write_all(b"\n")?;
    Ok(())
}
