//! Indented plain-text report

use crate::models::{FileOutline, OutlineReport};

/// Render one file's block: `name:`, one indented line per entry, blank line
pub fn format_file_text(file: &FileOutline) -> String {
    let mut output = format!("{}:\n", file.display_name());

    for entry in &file.entries {
        output.push_str(&format!(
            "{:indent$}{}\n",
            "",
            entry.text,
            indent = entry.kind.indent()
        ));
    }

    output.push('\n');
    output
}

/// Render every file in report order
pub fn format_text(data: &OutlineReport) -> String {
    data.files.iter().map(format_file_text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::fixtures;

    #[test]
    fn test_format_text() {
        let expected = "\
a.py:
    class Foo:
        def __init__(self):
            self.x
        def bar(self):
    import os

empty.py:

";
        assert_eq!(format_text(&fixtures::report()), expected);
    }

    #[test]
    fn test_empty_report_is_empty() {
        let mut report = fixtures::report();
        report.files.clear();
        assert_eq!(format_text(&report), "");
    }
}
