use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Standard FASTA body width.
pub const LINE_WIDTH: usize = 60;

/// Writes a single FASTA record to `path`, creating or overwriting the file.
/// The sequence body is wrapped at 60 bytes per line; a trailing short line is
/// kept. An empty sequence produces a header-only file.
pub fn write_record<P: AsRef<Path>>(path: P, header: &str, sequence: &[u8]) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_record_to(&mut writer, header, sequence)?;
    writer.flush()
}

/// Serializes the record into any writer.
pub fn write_record_to<W: Write>(writer: &mut W, header: &str, sequence: &[u8]) -> io::Result<()> {
    writeln!(writer, ">{}", header)?;
    for chunk in sequence.chunks(LINE_WIDTH) {
        writer.write_all(chunk)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}
