/*!
# Test Output Locator

Finds "error loading file" lines in JavaScript test-runner output
(JsTestDriver style) and turns them into file locations a console can
render as clickable links.

```text
error loading file: /test/foo/bar.js:42:7: Uncaught TypeError: x is not a function
                    └──── hyperlink span ───┘
```

- `/test/` is a virtual prefix; the path behind it is resolved as an
  absolute path first, then under a caller-supplied base directory
- file paths may contain colons; the longest prefix that names an existing
  file wins
- the column is optional, the error kind falls back to `Error`
- lines that don't fit produce `None`, never an error

## Usage

```rust,no_run
use std::path::Path;
use test_output_locator::parse_error_line;

let line = "error loading file: /test/foo/bar.js:42: Uncaught ReferenceError: x is not defined";
if let Some(location) = parse_error_line(line, Path::new("/project")) {
    println!("{} ({})", location, location.error_name());
    println!("link text: {}", location.hyperlink_text(line));
}
```

Whole outputs can be scanned with [`OutputScanner`]; the tokens are
configurable through [`LocatorConfig`].
*/

pub mod config;
pub mod core;
pub mod locator;
pub mod scanner;

pub use config::LocatorConfig;
pub use crate::core::{HyperlinkSpan, LocatorError};
pub use locator::{
    parse_error_line, ErrorLocator, FsResolver, ParsedErrorLocation, PathResolver,
    FALLBACK_ERROR_NAME,
};
pub use scanner::{LocatedLine, OutputScanner, ScanReport};
