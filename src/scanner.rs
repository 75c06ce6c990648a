/*!
# Output Scanner

Runs the locator over every line of captured test-runner output and
collects the lines that point at a file.
*/

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::BufRead;
use std::path::Path;
use tracing::debug;

use crate::core::{decode_lossy, read_output_file, LocatorError};
use crate::locator::{ErrorLocator, FsResolver, ParsedErrorLocation, PathResolver};

/// A matched output line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocatedLine {
    /// 0-based index of the line in the scanned output
    pub line_index: usize,
    pub location: ParsedErrorLocation,
}

/// Matches found in one piece of output, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub lines_scanned: usize,
    pub locations: Vec<LocatedLine>,
}

impl ScanReport {
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to serialize scan report")
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize scan report")
    }
}

#[derive(Debug, Clone)]
pub struct OutputScanner<R = FsResolver> {
    locator: ErrorLocator<R>,
}

impl<R: PathResolver> OutputScanner<R> {
    pub fn new(locator: ErrorLocator<R>) -> Self {
        Self { locator }
    }

    pub fn locator(&self) -> &ErrorLocator<R> {
        &self.locator
    }

    pub fn scan_str(&self, output: &str, base_path: &Path) -> ScanReport {
        let mut report = ScanReport::default();
        for (line_index, line) in output.lines().enumerate() {
            self.scan_line(&mut report, line_index, line, base_path);
        }
        self.finish(report)
    }

    /// Scans line by line; bytes that aren't valid UTF-8 are replaced, so a
    /// garbled line never hides the lines after it.
    pub fn scan_reader<B: BufRead>(&self, mut reader: B, base_path: &Path) -> std::io::Result<ScanReport> {
        let mut report = ScanReport::default();
        let mut buf = Vec::new();
        let mut line_index = 0;
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let bytes = buf.strip_suffix(b"\n").unwrap_or(&buf);
            let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
            let line = decode_lossy(bytes.to_vec());
            self.scan_line(&mut report, line_index, &line, base_path);
            line_index += 1;
        }
        Ok(self.finish(report))
    }

    /// Scans a captured output file; a leading UTF-8 BOM is ignored.
    pub fn scan_file<P: AsRef<Path>>(&self, path: P, base_path: &Path) -> Result<ScanReport> {
        let path = path.as_ref();
        let content = read_output_file(path).map_err(|source| LocatorError::ReadOutput {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.scan_str(&content, base_path))
    }

    fn scan_line(&self, report: &mut ScanReport, line_index: usize, line: &str, base_path: &Path) {
        report.lines_scanned += 1;
        if let Some(location) = self.locator.parse(line, base_path) {
            report.locations.push(LocatedLine {
                line_index,
                location,
            });
        }
    }

    fn finish(&self, report: ScanReport) -> ScanReport {
        debug!(
            lines = report.lines_scanned,
            matches = report.locations.len(),
            "scanned test output"
        );
        report
    }
}

impl Default for OutputScanner<FsResolver> {
    fn default() -> Self {
        Self::new(ErrorLocator::default())
    }
}
