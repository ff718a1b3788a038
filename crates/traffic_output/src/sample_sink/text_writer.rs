//! Line-delimited text dump of a sample.

use super::{SampleReport, SampleSink};
use crate::OutputError;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes a sequence to `<dir>/<stem>.txt`, one value per line.
///
/// Each line is the value's default `Display` rendering followed by a
/// newline; no header, no trailing blank line beyond the final newline.
/// Given the same sequence, the file content is byte-for-byte
/// reproducible.
///
/// # Examples
///
/// ```no_run
/// use traffic_output::sample_sink::{SampleReport, SampleSink, TextFileWriter};
///
/// let writer = TextFileWriter::new("./out");
/// let report = SampleReport {
///     title: "Uniform sample",
///     stem: "2022-12-03_14.03.22.123",
///     values: &[0.25, 0.5],
/// };
/// let path = writer.publish(&report).unwrap();
/// assert!(path.ends_with("2022-12-03_14.03.22.123.txt"));
/// ```
pub struct TextFileWriter {
    output_dir: PathBuf,
}

impl TextFileWriter {
    /// Creates a writer targeting `output_dir`, creating the directory if
    /// it does not exist.
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        let output_dir = output_dir.as_ref().to_path_buf();
        if !output_dir.exists() {
            fs::create_dir_all(&output_dir).ok();
        }
        Self { output_dir }
    }

    /// The directory this writer publishes into.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl SampleSink for TextFileWriter {
    fn publish(&self, report: &SampleReport<'_>) -> Result<PathBuf, OutputError> {
        let path = self.output_dir.join(format!("{}.txt", report.stem));

        let mut content = String::new();
        for value in report.values {
            // infallible: writing to a String cannot fail
            let _ = writeln!(content, "{}", value);
        }

        fs::write(&path, content).map_err(|source| OutputError::Io {
            path: path.clone(),
            source,
        })?;

        info!(
            path = %path.display(),
            values = report.values.len(),
            "sample written to text file"
        );

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join("trafgen_tests").join(name);
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_writes_one_value_per_line() {
        let writer = TextFileWriter::new(temp_dir("text_lines"));
        let report = SampleReport {
            title: "test",
            stem: "sample",
            values: &[0.25, 0.5, 0.0751953125],
        };

        let path = writer.publish(&report).unwrap();
        let content = fs::read_to_string(path).unwrap();
        assert_eq!(content, "0.25\n0.5\n0.0751953125\n");
    }

    #[test]
    fn test_empty_sample_writes_empty_file() {
        let writer = TextFileWriter::new(temp_dir("text_empty"));
        let report = SampleReport {
            title: "test",
            stem: "empty",
            values: &[],
        };

        let path = writer.publish(&report).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "");
    }

    #[test]
    fn test_reproducible_content() {
        let dir = temp_dir("text_repro");
        let writer = TextFileWriter::new(&dir);
        let values = [0.1, 0.2, 0.3];

        let first = writer
            .publish(&SampleReport {
                title: "a",
                stem: "first",
                values: &values,
            })
            .unwrap();
        let second = writer
            .publish(&SampleReport {
                title: "b",
                stem: "second",
                values: &values,
            })
            .unwrap();

        assert_eq!(
            fs::read(first).unwrap(),
            fs::read(second).unwrap()
        );
    }
}
