//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::enumerate::{RunReport, Solution};
use anyhow::{Context, Result};
use std::path::Path;

/// Formats runs and solutions for console and file output
pub struct SolutionFormatter;

impl SolutionFormatter {
    /// Format a single solution per the configured output format
    pub fn format_solution(solution: &Solution, format: OutputFormat) -> Result<String> {
        let mut output = String::new();

        if format.includes_algebraic() {
            let squares = solution.algebraic_squares()?;
            for square in squares {
                output.push_str(&square);
                output.push('\n');
            }
        }

        if format.includes_grid() {
            output.push_str(&solution.board()?.to_string());
        }

        Ok(output)
    }

    /// Format one full run: header line, each solution preceded by a blank
    /// line, then the count summary line
    pub fn format_run(report: &RunReport, format: OutputFormat) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!("run queen solve for n={}\n", report.board_size));

        for solution in &report.solutions {
            output.push('\n');
            output.push_str(&Self::format_solution(solution, format)?);
        }

        output.push_str(&format!(
            "solutions count for n = {}: {}\n",
            report.board_size,
            report.solution_count()
        ));

        Ok(output)
    }

    /// Format multiple runs as a summary table
    pub fn format_run_summary(reports: &[RunReport]) -> String {
        let mut output = String::new();

        output.push_str("Run Summary:\n");
        output.push_str("    n | Solutions | Time(ms)\n");
        output.push_str("------|-----------|---------\n");

        for report in reports {
            output.push_str(&format!(
                "{:5} | {:9} | {:8}\n",
                report.board_size,
                report.solution_count(),
                report.total_time.as_millis()
            ));
        }

        output
    }

    /// Save a run's solutions: one text file per solution plus a JSON summary
    pub fn save_run<P: AsRef<Path>>(report: &RunReport, output_dir: P) -> Result<()> {
        let run_dir = output_dir
            .as_ref()
            .join(format!("n{:02}", report.board_size));
        std::fs::create_dir_all(&run_dir)
            .with_context(|| format!("Failed to create directory {}", run_dir.display()))?;

        for solution in &report.solutions {
            let text_path = run_dir.join(format!("solution_{:03}.txt", solution.index));
            let content = Self::format_solution(solution, OutputFormat::Both)?;
            std::fs::write(&text_path, content)
                .with_context(|| format!("Failed to write {}", text_path.display()))?;

            let json_path = run_dir.join(format!("solution_{:03}.json", solution.index));
            solution.save_to_file(&json_path)?;
        }

        let summary_path = run_dir.join("run_summary.json");
        let summary_json = serde_json::to_string_pretty(&report.solutions)
            .context("Failed to serialize run summary")?;
        std::fs::write(&summary_path, summary_json)
            .with_context(|| format!("Failed to write {}", summary_path.display()))?;

        Ok(())
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
