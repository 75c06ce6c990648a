/*!
# Error Locator

Recognizes lines of the form

```text
error loading file: /test/<path>:<line>[:<column>]: [Uncaught ][exception: ]<Name>: <details>
```

in test-runner output and resolves `<path>` to a file on disk. The path
may itself contain colons, so the path/line boundary is found by probing
every colon and keeping the last one whose prefix names an existing file.
Anything that doesn't fit yields `None`; there is no partial result.
*/

pub mod location;
pub mod resolver;

pub use location::{ParsedErrorLocation, ERROR_NAME_SUFFIX, FALLBACK_ERROR_NAME};
pub use resolver::{resolve_virtual_path, FsResolver, PathResolver};

use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use crate::config::LocatorConfig;
use crate::core::HyperlinkSpan;

/// Line parser bound to a configuration and a filesystem probe.
#[derive(Debug, Clone, Default)]
pub struct ErrorLocator<R = FsResolver> {
    config: LocatorConfig,
    resolver: R,
}

impl ErrorLocator<FsResolver> {
    pub fn new(config: LocatorConfig) -> Self {
        Self::with_resolver(config, FsResolver)
    }
}

impl<R: PathResolver> ErrorLocator<R> {
    pub fn with_resolver(config: LocatorConfig, resolver: R) -> Self {
        Self { config, resolver }
    }

    pub fn config(&self) -> &LocatorConfig {
        &self.config
    }

    /// Parses one output line, resolving relative paths against `base_path`.
    pub fn parse(&self, line: &str, base_path: &Path) -> Option<ParsedErrorLocation> {
        let marker = self.config.marker.as_str();
        let rest = line.strip_prefix(marker)?;

        let Some((path_end, file_path)) = self.find_file_path_end(rest, base_path) else {
            debug!(line, "no prefix of the reported path resolves to a file");
            return None;
        };

        let line_start = path_end + 1;
        let Some(line_end) = rest[line_start..].find(':').map(|i| line_start + i) else {
            debug!(line, "line number is not followed by ':'");
            return None;
        };
        let Some(line_number) = parse_int(&rest[line_start..line_end])
            .and_then(|n| u32::try_from(n).ok())
            .filter(|n| *n >= 1)
        else {
            debug!(line, "line number is not a positive integer");
            return None;
        };

        let mut text_start = line_end + 1;
        let mut column_number = None;
        if let Some(column_end) = rest[line_end + 1..].find(':').map(|i| line_end + 1 + i) {
            if let Some(column) = parse_int(&rest[line_end + 1..column_end]) {
                column_number = u32::try_from(column).ok().filter(|c| *c >= 1);
                text_start = column_end + 1;
            }
        }

        let error_name = self.extract_error_name(&rest[text_start..]);

        let link_start = marker.chars().count();
        let link_len = rest[..text_start].chars().count() - 1;
        let hyperlink = HyperlinkSpan::new(link_start, link_start + link_len);

        Some(ParsedErrorLocation::new(
            file_path,
            line_number,
            column_number,
            Some(error_name.to_string()),
            hyperlink,
        ))
    }

    /// Byte index of the last colon in `text` whose prefix resolves to a
    /// file, together with that file.
    fn find_file_path_end(&self, text: &str, base_path: &Path) -> Option<(usize, PathBuf)> {
        let mut last_valid = None;
        for (index, _) in text.match_indices(':').filter(|(index, _)| *index > 0) {
            let candidate = &text[..index];
            trace!(candidate, "probing path prefix");
            if let Some(file) = resolve_virtual_path(
                &self.resolver,
                &self.config.path_sentinel,
                candidate,
                base_path,
            ) {
                last_valid = Some((index, file));
            }
        }
        last_valid
    }

    fn extract_error_name<'a>(&self, message: &'a str) -> &'a str {
        let mut name = trim_control(message);
        if let Some(stripped) = name.strip_prefix(self.config.uncaught_prefix.as_str()) {
            name = trim_control(stripped);
        }
        if let Some(stripped) = name.strip_prefix(self.config.exception_token.as_str()) {
            name = trim_control(stripped);
        }
        match name.find(':') {
            Some(details_start) if details_start > 0 => &name[..details_start],
            _ => name,
        }
    }
}

/// Parses `line` with the default JsTestDriver tokens and filesystem lookups.
pub fn parse_error_line(line: &str, base_path: &Path) -> Option<ParsedErrorLocation> {
    ErrorLocator::new(LocatorConfig::default()).parse(line, base_path)
}

/// Trims spaces and ASCII control characters from both ends.
fn trim_control(s: &str) -> &str {
    s.trim_matches(|c: char| c <= ' ')
}

fn parse_int(s: &str) -> Option<i32> {
    s.parse().ok()
}
