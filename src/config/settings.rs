//! Configuration settings for the N-queens enumerator

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub puzzle: PuzzleConfig,
    pub solver: SolverConfig,
    pub encoding: EncodingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Board sizes to enumerate, one independent run per entry
    pub board_sizes: Vec<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Upper bound on enumerated solutions per run
    pub max_solutions: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodingConfig {
    /// Emit the row-major ordering family that breaks queen-label symmetry.
    /// With it, counts match the classical N-queens counts; without it,
    /// every arrangement is reported once per admissible labeling.
    pub symmetry_breaking: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub output_directory: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Column-letter plus row-number squares ("A1")
    Algebraic,
    /// Full board grid with 'Q' and '+' glyphs
    Grid,
    Both,
}

impl OutputFormat {
    pub fn includes_algebraic(self) -> bool {
        matches!(self, OutputFormat::Algebraic | OutputFormat::Both)
    }

    pub fn includes_grid(self) -> bool {
        matches!(self, OutputFormat::Grid | OutputFormat::Both)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            puzzle: PuzzleConfig {
                board_sizes: vec![3, 4, 8],
            },
            solver: SolverConfig {
                max_solutions: 10_000,
            },
            encoding: EncodingConfig {
                symmetry_breaking: true,
            },
            output: OutputConfig {
                format: OutputFormat::Grid,
                output_directory: PathBuf::from("output/solutions"),
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.puzzle.board_sizes.is_empty() {
            anyhow::bail!("At least one board size must be configured");
        }

        for &size in &self.puzzle.board_sizes {
            if size == 0 {
                anyhow::bail!("Board size must be at least 1");
            }
            if self.output.format.includes_algebraic() && size > 26 {
                anyhow::bail!(
                    "Board size {} exceeds the 26 columns expressible in algebraic notation; \
                     use the grid output format",
                    size
                );
            }
        }

        if self.solver.max_solutions == 0 {
            anyhow::bail!("Maximum solutions must be positive");
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(ref board_sizes) = cli_overrides.board_sizes {
            self.puzzle.board_sizes = board_sizes.clone();
        }
        if let Some(max_solutions) = cli_overrides.max_solutions {
            self.solver.max_solutions = max_solutions;
        }
        if let Some(symmetry_breaking) = cli_overrides.symmetry_breaking {
            self.encoding.symmetry_breaking = symmetry_breaking;
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
        if let Some(ref output_dir) = cli_overrides.output_dir {
            self.output.output_directory = output_dir.clone();
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub board_sizes: Option<Vec<usize>>,
    pub max_solutions: Option<usize>,
    pub symmetry_breaking: Option<bool>,
    pub format: Option<OutputFormat>,
    pub output_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.puzzle.board_sizes, vec![3, 4, 8]);
    }

    #[test]
    fn test_zero_board_size_rejected() {
        let mut settings = Settings::default();
        settings.puzzle.board_sizes = vec![4, 0];
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_zero_max_solutions_rejected() {
        let mut settings = Settings::default();
        settings.solver.max_solutions = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_empty_board_sizes_rejected() {
        let mut settings = Settings::default();
        settings.puzzle.board_sizes.clear();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_algebraic_format_caps_board_size() {
        let mut settings = Settings::default();
        settings.output.format = OutputFormat::Algebraic;
        settings.puzzle.board_sizes = vec![27];
        assert!(settings.validate().is_err());

        settings.output.format = OutputFormat::Grid;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_yaml_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        let mut settings = Settings::default();
        settings.puzzle.board_sizes = vec![5, 6];
        settings.solver.max_solutions = 42;
        settings.to_file(&path).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded.puzzle.board_sizes, vec![5, 6]);
        assert_eq!(loaded.solver.max_solutions, 42);
        assert!(loaded.encoding.symmetry_breaking);
    }

    #[test]
    fn test_cli_overrides() {
        let mut settings = Settings::default();
        let overrides = CliOverrides {
            board_sizes: Some(vec![6]),
            max_solutions: Some(5),
            symmetry_breaking: Some(false),
            format: Some(OutputFormat::Both),
            output_dir: Some(PathBuf::from("elsewhere")),
        };

        settings.merge_with_cli(&overrides);
        assert_eq!(settings.puzzle.board_sizes, vec![6]);
        assert_eq!(settings.solver.max_solutions, 5);
        assert!(!settings.encoding.symmetry_breaking);
        assert_eq!(settings.output.format, OutputFormat::Both);
        assert_eq!(settings.output.output_directory, PathBuf::from("elsewhere"));
    }
}
