//! ANSI colored output formatter
//!
//! Same layout as the text report, with colors per entry kind and a
//! header/footer for terminal viewing.

use crate::models::{EntryKind, FileOutline, OutlineReport};
use colored::{ColoredString, Colorize};

/// Color an entry's text according to its kind
fn paint(kind: EntryKind, text: &str) -> ColoredString {
    match kind {
        EntryKind::Class => text.bright_yellow().bold(),
        EntryKind::Method => text.bright_cyan(),
        EntryKind::Assignment => text.white(),
        EntryKind::Import => text.magenta(),
    }
}

/// Format a single file with ANSI colors
pub fn format_file_ansi(file: &FileOutline) -> String {
    let mut output = format!("{}\n", format!("{}:", file.display_name()).bold().underline());

    for entry in &file.entries {
        output.push_str(&format!(
            "{:indent$}{}\n",
            "",
            paint(entry.kind, &entry.text),
            indent = entry.kind.indent()
        ));
    }

    output.push('\n');
    output
}

/// Format report data as ANSI colored text
pub fn format_ansi(data: &OutlineReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "\n{} {}\n\n",
        " Outlines ".bold().on_blue(),
        data.root.display()
    ));

    for file in &data.files {
        output.push_str(&format_file_ansi(file));
    }

    output.push_str(&format!(
        "{}\n",
        format!(
            "{} files, {} entries in {}ms",
            data.stats.total_files, data.stats.total_entries, data.metadata.scan_duration_ms
        )
        .dimmed()
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::fixtures;

    #[test]
    fn test_format_ansi_contains_entries() {
        let rendered = format_ansi(&fixtures::report());

        assert!(rendered.contains("a.py:"));
        assert!(rendered.contains("class Foo:"));
        assert!(rendered.contains("self.x"));
        assert!(rendered.contains("2 files, 5 entries"));
    }

    #[test]
    fn test_entries_keep_text_report_columns() {
        let file = &fixtures::report().files[0];
        let rendered = format_file_ansi(file);
        let lines: Vec<&str> = rendered.lines().skip(1).collect();

        assert_eq!(lines.len(), file.entries.len() + 1);
        for (line, entry) in lines.iter().zip(&file.entries) {
            let indent = line.len() - line.trim_start_matches(' ').len();
            assert_eq!(indent, entry.kind.indent());
            assert!(line.contains(&entry.text));
        }
        assert_eq!(lines.last(), Some(&""));
    }
}
