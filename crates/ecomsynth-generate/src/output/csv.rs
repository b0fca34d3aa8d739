use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::errors::GenerationError;
use crate::serialize::CsvRow;

/// Size and checksum of a written file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub bytes_written: u64,
    pub sha256: String,
}

/// Write a header row followed by `rows` in `fieldnames` order.
///
/// Any existing file at `path` is replaced. Fields missing from a row are
/// written as empty values.
pub fn write_csv(
    path: &Path,
    fieldnames: &[&str],
    rows: &[CsvRow],
) -> Result<WrittenFile, GenerationError> {
    let writer = BufWriter::new(File::create(path)?);
    let hashing = HashingWriter::new(writer);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(hashing);

    writer.write_record(fieldnames)?;

    for row in rows {
        let record: Vec<&str> = fieldnames
            .iter()
            .map(|name| row.get(*name).map(String::as_str).unwrap_or_default())
            .collect();
        writer.write_record(&record)?;
    }

    writer.flush()?;
    let hashing = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(hashing.finish())
}

struct HashingWriter<W: Write> {
    inner: W,
    bytes: u64,
    hasher: Sha256,
}

impl<W: Write> HashingWriter<W> {
    fn new(inner: W) -> Self {
        Self {
            inner,
            bytes: 0,
            hasher: Sha256::new(),
        }
    }

    fn finish(self) -> WrittenFile {
        WrittenFile {
            bytes_written: self.bytes,
            sha256: hex::encode(self.hasher.finalize()),
        }
    }
}

impl<W: Write> Write for HashingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.hasher.update(&buf[..size]);
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
