use crate::core::generator::LineGenerator;
use crate::utils::error::Result;
use indicatif::ProgressBar;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Rows written between progress bar updates.
const PROGRESS_BATCH: u64 = 10_000;

/// Writes `rows` newline-terminated lines to `out`, stopping at the first write error.
pub fn write_rows<W: Write>(
    out: &mut W,
    generator: &mut LineGenerator,
    rows: u64,
    progress: &ProgressBar,
) -> Result<u64> {
    let mut pending = 0;
    for _ in 0..rows {
        writeln!(out, "{}", generator.next_row())?;

        pending += 1;
        if pending == PROGRESS_BATCH {
            progress.inc(pending);
            pending = 0;
        }
    }
    progress.inc(pending);

    Ok(rows)
}

/// Creates or truncates `path` and fills it with `rows` lines. No cleanup on failure.
pub fn gen_lines_to_file(
    path: &Path,
    rows: u64,
    generator: &mut LineGenerator,
    progress: &ProgressBar,
) -> Result<u64> {
    let mut out = BufWriter::new(File::create(path)?);
    let written = write_rows(&mut out, generator, rows, progress)?;
    // BufWriter's Drop swallows errors.
    out.flush()?;
    tracing::debug!("Flushed {} rows to {}", written, path.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Row;
    use crate::utils::error::GenError;
    use std::io;

    struct FailingWriter {
        accepted: usize,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.accepted == 0 {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
            }
            self.accepted -= 1;
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_rows_into_buffer() {
        let mut generator = LineGenerator::seeded(3);
        let progress = ProgressBar::hidden();
        let mut buffer = Vec::new();

        let written = write_rows(&mut buffer, &mut generator, 25_000, &progress).unwrap();
        assert_eq!(written, 25_000);
        assert_eq!(progress.position(), 25_000);

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.ends_with('\n'));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 25_000);
        for line in lines {
            assert!(line.parse::<Row>().is_ok(), "bad line: {}", line);
        }
    }

    #[test]
    fn test_zero_rows_writes_nothing() {
        let mut generator = LineGenerator::seeded(3);
        let mut buffer = Vec::new();
        let written = write_rows(&mut buffer, &mut generator, 0, &ProgressBar::hidden()).unwrap();
        assert_eq!(written, 0);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_write_error_aborts() {
        let mut generator = LineGenerator::seeded(3);
        let mut out = FailingWriter { accepted: 4 };
        let result = write_rows(&mut out, &mut generator, 100, &ProgressBar::hidden());
        assert!(matches!(result, Err(GenError::IoFailure(e)) if e.kind() == io::ErrorKind::PermissionDenied));
    }
}
