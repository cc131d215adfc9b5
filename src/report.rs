//! Reporter - aligned table and bar graph
//!
//! Purely presentational: one summary row per contender, column widths
//! computed from the longest description, a header reporting the input
//! generation time and size, an output preview, and a proportional bar
//! graph as a coarse visual comparator. Failures never change the table
//! structure, only the notes column.

use std::io::{self, Write};
use std::time::Duration;

use crate::checker::Note;

/// One summary row, produced from a contender's final measured trial.
#[derive(Debug, Clone)]
pub struct ReportRow {
    pub description: String,
    pub length: Option<usize>,
    pub fingerprint: Option<u32>,
    pub elapsed: Duration,
    pub notes: Vec<Note>,
}

/// Accumulated session results; append-only until rendered.
pub struct BenchmarkReport {
    chain_len: usize,
    generation_time: Duration,
    bar_graph_ms_divisor: u64,
    rows: Vec<ReportRow>,
    preview: Option<String>,
}

impl BenchmarkReport {
    pub fn new(chain_len: usize, generation_time: Duration, bar_graph_ms_divisor: u64) -> Self {
        Self {
            chain_len,
            generation_time,
            bar_graph_ms_divisor: bar_graph_ms_divisor.max(1),
            rows: Vec::new(),
            preview: None,
        }
    }

    pub fn push_row(&mut self, row: ReportRow) {
        self.rows.push(row);
    }

    /// Preview of the reference output; first caller wins.
    pub fn set_preview(&mut self, preview: String) {
        self.preview.get_or_insert(preview);
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    fn description_width(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.description.len())
            .max()
            .unwrap_or(0)
            .max("Contender".len())
    }

    /// Render the full report as plain text.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "Generated input (length: {}) in {} ms.",
            self.chain_len,
            self.generation_time.as_millis()
        )?;
        writeln!(out)?;

        let width = self.description_width();
        let header = format!(
            "{:<width$} | {:>9} | {:>12} | {:>7} | {}",
            "Contender", "Length", "Fingerprint", "Time", "Notes"
        );
        writeln!(out, "{header}")?;
        writeln!(out, "{}", "-".repeat(header.len()))?;

        for row in &self.rows {
            let length = row
                .length
                .map(|l| l.to_string())
                .unwrap_or_else(|| "-".to_string());
            let fingerprint = row
                .fingerprint
                .map(|f| format!("{f:08x}"))
                .unwrap_or_else(|| "-".to_string());
            let time = format!("{}ms", row.elapsed.as_millis());
            let notes = row
                .notes
                .iter()
                .map(Note::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(
                out,
                "{:<width$} | {:>9} | {:>12} | {:>7} | {}",
                row.description, length, fingerprint, time, notes
            )?;
        }

        if let Some(preview) = &self.preview {
            writeln!(out)?;
            writeln!(out, "Output preview: {preview}")?;
        }

        writeln!(out)?;
        for row in &self.rows {
            let bar_len = (row.elapsed.as_millis() as u64 / self.bar_graph_ms_divisor) as usize;
            writeln!(out, "{:<width$} | {}", row.description, "#".repeat(bar_len))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> BenchmarkReport {
        let mut report = BenchmarkReport::new(7, Duration::from_millis(12), 5);
        report.push_row(ReportRow {
            description: "(#1) map-lookup, FxHashMap per symbol".to_string(),
            length: Some(7),
            fingerprint: Some(0xdeadbeef),
            elapsed: Duration::from_millis(42),
            notes: vec![],
        });
        report.push_row(ReportRow {
            description: "(#4) look-ahead replace, reserved spot".to_string(),
            length: None,
            fingerprint: None,
            elapsed: Duration::from_millis(0),
            notes: vec![Note::NoData],
        });
        report.set_preview("CTAATGT".to_string());
        report
    }

    fn rendered(report: &BenchmarkReport) -> String {
        let mut buf = Vec::new();
        report.render(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_header_reports_generation_time_and_size() {
        let text = rendered(&sample_report());
        assert!(text.starts_with("Generated input (length: 7) in 12 ms."));
        assert!(text.contains("Contender"));
        assert!(text.contains("Fingerprint"));
    }

    #[test]
    fn test_absent_result_renders_dashes_and_note() {
        let text = rendered(&sample_report());
        let row = text
            .lines()
            .find(|l| l.contains("reserved spot") && l.contains('|'))
            .unwrap();
        assert!(row.contains(" - "), "absent length/fingerprint as dashes");
        assert!(row.contains("No data."));
    }

    #[test]
    fn test_columns_align_on_longest_description() {
        let text = rendered(&sample_report());
        let pipe_cols: Vec<usize> = text
            .lines()
            .filter(|l| l.contains(" | "))
            .map(|l| l.find(" | ").unwrap())
            .collect();
        assert!(pipe_cols.len() >= 4);
        assert!(
            pipe_cols.windows(2).all(|w| w[0] == w[1]),
            "description column width must be uniform"
        );
    }

    #[test]
    fn test_bar_graph_is_proportional() {
        let text = rendered(&sample_report());
        // 42ms / 5 = 8 characters.
        assert!(text.contains(&"#".repeat(8)));
        assert!(!text.contains(&"#".repeat(9)));
    }

    #[test]
    fn test_preview_line_present() {
        let text = rendered(&sample_report());
        assert!(text.contains("Output preview: CTAATGT"));
    }

    #[test]
    fn test_first_preview_wins() {
        let mut report = sample_report();
        report.set_preview("OTHER".to_string());
        assert!(rendered(&report).contains("Output preview: CTAATGT"));
    }
}
