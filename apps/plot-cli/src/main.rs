use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use plot_config::{
    Catalog, ConfigError, PlotConfig, is_reference_line_plot_path_type, plot_path_display_name,
};

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "plot-cli")]
#[command(about = "Inspect and migrate persisted plot panel configs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a plot config file (JSON or YAML)
    Validate {
        /// Path to the config file
        config_path: PathBuf,
    },
    /// List the configured series with their display names
    Series {
        /// Path to the config file
        config_path: PathBuf,
        /// Display language for generated series names
        #[arg(long, default_value = "en")]
        lang: String,
    },
    /// Rewrite a config in the current shape, dropping deprecated fields
    Migrate {
        /// Path to the config file
        config_path: PathBuf,
        /// Output JSON file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { config_path } => cmd_validate(&config_path),
        Commands::Series { config_path, lang } => cmd_series(&config_path, &lang),
        Commands::Migrate {
            config_path,
            output,
        } => cmd_migrate(&config_path, output.as_deref()),
    }
}

fn cmd_validate(config_path: &Path) -> CliResult<()> {
    println!("Validating plot config: {}", config_path.display());
    let config = plot_config::load(config_path)?;
    if let Err(err) = config.x_axis_path() {
        tracing::warn!(%err, "x-axis path missing");
        println!("! {err}");
    }
    println!("✓ Config is valid ({} paths)", config.paths.len());
    Ok(())
}

fn cmd_series(config_path: &Path, lang: &str) -> CliResult<()> {
    let config = plot_config::load(config_path)?;
    let catalog = Catalog::builtin(lang);

    if config.paths.is_empty() {
        println!("No series configured");
        return Ok(());
    }

    println!("Series ({:?} x-axis):", config.x_axis_val);
    for line in series_lines(&config, &catalog) {
        println!("  {line}");
    }
    Ok(())
}

fn series_lines(config: &PlotConfig, catalog: &Catalog) -> Vec<String> {
    config
        .paths
        .iter()
        .enumerate()
        .map(|(idx, path)| {
            let mut line = format!("{}. {}", idx + 1, plot_path_display_name(path, idx, catalog));
            if is_reference_line_plot_path_type(path) {
                line.push_str(" [reference line]");
            }
            if !path.enabled {
                line.push_str(" [disabled]");
            }
            line
        })
        .collect()
}

fn cmd_migrate(config_path: &Path, output: Option<&Path>) -> CliResult<()> {
    let config = plot_config::load(config_path)?;

    match output {
        Some(path) => {
            plot_config::save_json(path, &config)?;
            println!("✓ Migrated config written to {}", path.display());
        }
        None => {
            let content = serde_json::to_string_pretty(&config)?;
            println!("{content}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use plot_config::PlotPath;

    #[test]
    fn series_lines_mark_reference_and_disabled_paths() {
        let mut hidden = PlotPath::new("/hidden");
        hidden.enabled = false;
        let config = PlotConfig {
            paths: vec![PlotPath::new(""), PlotPath::new("0.5"), hidden],
            ..PlotConfig::default()
        };

        let lines = series_lines(&config, &Catalog::builtin("en"));
        assert_eq!(
            lines,
            vec![
                "1. Series 1".to_string(),
                "2. 0.5 [reference line]".to_string(),
                "3. /hidden [disabled]".to_string(),
            ]
        );
    }

    #[test]
    fn cli_parses_migrate_output() {
        let cli = Cli::parse_from(["plot-cli", "migrate", "in.json", "-o", "out.json"]);
        match cli.command {
            Commands::Migrate {
                config_path,
                output,
            } => {
                assert_eq!(config_path, PathBuf::from("in.json"));
                assert_eq!(output, Some(PathBuf::from("out.json")));
            }
            _ => panic!("expected migrate command"),
        }
    }
}
