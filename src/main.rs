//! Main CLI application for the N-queens SAT enumerator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nqueens_sat::{
    config::{CliOverrides, OutputFormat, Settings},
    enumerate::SolutionValidator,
    queens::Position,
    utils::{ColorOutput, SolutionFormatter},
};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "nqueens_sat")]
#[command(about = "N-Queens SAT Enumerator")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enumerate all solutions for the configured board sizes
    Solve {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Board sizes to solve (overrides config, repeatable)
        #[arg(short = 'n', long = "size")]
        sizes: Vec<usize>,

        /// Maximum solutions per board size (overrides config)
        #[arg(short, long)]
        max_solutions: Option<usize>,

        /// Output format: algebraic, grid, or both (overrides config)
        #[arg(short, long)]
        format: Option<String>,

        /// Disable the queen-ordering symmetry breaking constraints
        #[arg(long)]
        no_symmetry_breaking: bool,

        /// Save solutions to the output directory
        #[arg(long)]
        save: bool,

        /// Output directory (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Create an example configuration file
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Check a hand-given placement against the puzzle rules
    Validate {
        /// Board size
        #[arg(short = 'n', long)]
        size: usize,

        /// Comma-separated algebraic squares, one per queen (e.g. "B1,D2,A3,C4")
        #[arg(short, long)]
        queens: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            config,
            sizes,
            max_solutions,
            format,
            no_symmetry_breaking,
            save,
            output,
            verbose,
        } => solve_command(
            config,
            sizes,
            max_solutions,
            format,
            no_symmetry_breaking,
            save,
            output,
            verbose,
        ),
        Commands::Setup { directory, force } => setup_command(directory, force),
        Commands::Validate { size, queens } => validate_command(size, &queens),
    }
}

fn parse_format(text: &str) -> Result<OutputFormat> {
    match text {
        "algebraic" => Ok(OutputFormat::Algebraic),
        "grid" => Ok(OutputFormat::Grid),
        "both" => Ok(OutputFormat::Both),
        other => anyhow::bail!(
            "unknown output format '{}' (expected algebraic, grid, or both)",
            other
        ),
    }
}

#[allow(clippy::too_many_arguments)]
fn solve_command(
    config_path: PathBuf,
    sizes: Vec<usize>,
    max_solutions: Option<usize>,
    format: Option<String>,
    no_symmetry_breaking: bool,
    save: bool,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    // Load configuration
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        if verbose {
            println!(
                "{}",
                ColorOutput::warning(&format!(
                    "Config file {} not found, using defaults",
                    config_path.display()
                ))
            );
        }
        Settings::default()
    };

    // Apply CLI overrides
    let cli_overrides = CliOverrides {
        board_sizes: if sizes.is_empty() { None } else { Some(sizes) },
        max_solutions,
        symmetry_breaking: if no_symmetry_breaking { Some(false) } else { None },
        format: format.as_deref().map(parse_format).transpose()?,
        output_dir: output,
    };
    settings.merge_with_cli(&cli_overrides);

    if verbose {
        println!("Configuration:");
        println!("  Board sizes: {:?}", settings.puzzle.board_sizes);
        println!("  Max solutions: {}", settings.solver.max_solutions);
        println!("  Symmetry breaking: {}", settings.encoding.symmetry_breaking);
        println!();
    }

    settings
        .validate()
        .context("Configuration validation failed")?;

    let start_time = Instant::now();
    let reports = nqueens_sat::enumerate_all(&settings).context("Enumeration failed")?;
    let total_time = start_time.elapsed();

    for report in &reports {
        println!(
            "{}",
            SolutionFormatter::format_run(report, settings.output.format)?
        );
    }

    println!("{}", SolutionFormatter::format_run_summary(&reports));
    println!(
        "{}",
        ColorOutput::success(&format!(
            "Completed {} run(s) in {:.3}s",
            reports.len(),
            total_time.as_secs_f64()
        ))
    );

    if save {
        for report in &reports {
            SolutionFormatter::save_run(report, &settings.output.output_directory)?;
        }
        println!(
            "Solutions saved to {}",
            settings.output.output_directory.display()
        );
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    let config_dir = directory.join("config");
    std::fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create directory {}", config_dir.display()))?;

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        let default_settings = Settings::default();
        default_settings
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    println!("{}", ColorOutput::success("Setup complete"));
    println!("Run: cargo run -- solve --config config/default.yaml");

    Ok(())
}

fn validate_command(size: usize, queens: &str) -> Result<()> {
    if size == 0 {
        anyhow::bail!("Board size must be at least 1");
    }

    let positions: Vec<Position> = queens
        .split(',')
        .map(|square| {
            Position::parse_algebraic(square, size)
                .with_context(|| format!("invalid square '{}'", square.trim()))
        })
        .collect::<Result<_>>()?;

    let validator = SolutionValidator::new();
    let result = validator.validate(&positions, size);

    println!("{}", result);
    if result.is_valid {
        println!("{}", ColorOutput::success("Placement is valid"));
    } else {
        println!("{}", ColorOutput::error("Placement is invalid"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "nqueens_sat",
            "solve",
            "--config",
            "test.yaml",
            "-n",
            "4",
            "-n",
            "8",
            "--max-solutions",
            "5",
        ]);

        assert!(cli.is_ok());
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(parse_format("grid").unwrap(), OutputFormat::Grid);
        assert_eq!(parse_format("algebraic").unwrap(), OutputFormat::Algebraic);
        assert_eq!(parse_format("both").unwrap(), OutputFormat::Both);
        assert!(parse_format("fancy").is_err());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("config/default.yaml").exists());
    }

    #[test]
    fn test_validate_command_accepts_valid_placement() {
        assert!(validate_command(4, "B1,D2,A3,C4").is_ok());
    }

    #[test]
    fn test_validate_command_rejects_bad_square() {
        assert!(validate_command(4, "Z9").is_err());
    }
}
