//! Command-line interface for streamlist.
//!
//! Provides commands for running the watch list pass, listing the
//! catalog and inspecting the resolved configuration.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::warn;

use crate::config::{self, ResolvedConfig};
use crate::core::{Pick, Session, WatchListReport};
use crate::library::{Catalog, ContentId, ContentItem, ContentType};
use crate::seed::Seed;

/// streamlist - video catalog and watch list
#[derive(Parser, Debug)]
#[command(name = "streamlist")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Save one available video to the watch list and print it (default)
    Run {
        /// Seed file (YAML or JSON); built-in data if not provided
        #[arg(short, long)]
        seed: Option<PathBuf>,

        /// Save this catalog ID instead of the first available video
        #[arg(short, long)]
        pick: Option<ContentId>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List the catalog
    Catalog {
        /// Seed file (YAML or JSON); built-in data if not provided
        #[arg(short, long)]
        seed: Option<PathBuf>,

        /// Only show available videos
        #[arg(short, long)]
        available: bool,

        /// Filter by content type (feature-film, episodic-series, documentary or an alias)
        #[arg(short, long)]
        content_type: Option<ContentType>,
    },

    /// Show resolved configuration (debug)
    Config,
}

/// Output format for the watch list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text lines
    #[default]
    Text,

    /// JSON object
    Json,
}

impl Cli {
    /// The command to execute; no subcommand means `run` with defaults
    pub fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Run {
            seed: None,
            pick: None,
            format: OutputFormat::Text,
        })
    }

    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();

        match self.into_command() {
            Commands::Run { seed, pick, format } => {
                let seed = load_seed(seed)?;
                let show_icon = show_icon(config::config());
                run_watch_list(seed, pick, format, show_icon, &mut out)
            }
            Commands::Catalog {
                seed,
                available,
                content_type,
            } => {
                let Seed { catalog, .. } = load_seed(seed)?;
                list_catalog(&catalog, available, content_type, &mut out)
            }
            Commands::Config => show_config(config::config()?, &mut out),
        }
    }
}

/// Load the seed, preferring an explicit path over configuration
fn load_seed(seed: Option<PathBuf>) -> Result<Seed> {
    let path = match seed {
        Some(path) => Some(path),
        None => config::seed_file()?,
    };

    Seed::load_or_builtin(path.as_deref()).context("Failed to load seed data")
}

/// Icon setting from configuration; a broken config does not block the pass
fn show_icon(cfg: Result<&ResolvedConfig>) -> bool {
    match cfg {
        Ok(cfg) => cfg.display.show_icon,
        Err(e) => {
            warn!(error = %format!("{:#}", e), "Configuration unavailable, using defaults");
            true
        }
    }
}

/// Run the single watch list pass
fn run_watch_list<W: Write>(
    seed: Seed,
    pick: Option<ContentId>,
    format: OutputFormat,
    show_icon: bool,
    out: &mut W,
) -> Result<()> {
    let Seed { catalog, mut user } = seed;
    let pick = pick.map(Pick::Id).unwrap_or_default();

    match format {
        OutputFormat::Text => Session::new(&catalog, &mut user).run(pick, show_icon, out)?,
        OutputFormat::Json => {
            Session::new(&catalog, &mut user).save(pick)?;
            let summary = WatchListReport::new(&user).summary();
            serde_json::to_writer_pretty(&mut *out, &summary)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

/// List the catalog
fn list_catalog<W: Write>(
    catalog: &Catalog,
    available: bool,
    content_type: Option<ContentType>,
    out: &mut W,
) -> Result<()> {
    let filtered;
    let catalog = if available {
        filtered = catalog.available();
        &filtered
    } else {
        catalog
    };

    let items: Vec<&ContentItem> = match content_type {
        Some(ct) => catalog.filter_by_type(ct),
        None => catalog.iter().collect(),
    };

    if items.is_empty() {
        writeln!(out, "No content matches.")?;
        return Ok(());
    }

    writeln!(out, "{:<6} {:<16} {:>5} {:<10} {:<40}", "ID", "TYPE", "MIN", "AVAILABLE", "TITLE")?;
    writeln!(out, "{}", "-".repeat(80))?;

    for item in &items {
        let title_truncated = if item.title.chars().count() > 37 {
            format!("{}...", item.title.chars().take(37).collect::<String>())
        } else {
            item.title.clone()
        };
        writeln!(
            out,
            "{:<6} {:<16} {:>5} {:<10} {:<40}",
            item.id.to_string(),
            item.category.to_string(),
            item.duration_minutes,
            if item.is_available { "yes" } else { "no" },
            title_truncated
        )?;
    }

    writeln!(out, "\nTotal: {} items", items.len())?;

    Ok(())
}

/// Show resolved configuration
fn show_config<W: Write>(cfg: &ResolvedConfig, out: &mut W) -> Result<()> {
    writeln!(out, "streamlist configuration")?;
    writeln!(out)?;
    writeln!(
        out,
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    )?;
    writeln!(out, "Home:        {}", cfg.home.display())?;
    writeln!(
        out,
        "Seed:        {}",
        cfg.seed_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(built-in)".to_string())
    )?;
    writeln!(out)?;
    writeln!(out, "Display:")?;
    writeln!(out, "  Icon: {}", if cfg.display.show_icon { "on" } else { "off" })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplaySettings;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_no_subcommand_runs_with_defaults() {
        let cli = Cli::try_parse_from(["streamlist"]).unwrap();

        match cli.into_command() {
            Commands::Run { seed, pick, format } => {
                assert!(seed.is_none());
                assert!(pick.is_none());
                assert_eq!(format, OutputFormat::Text);
            }
            other => panic!("Expected Run, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_run_with_pick_and_format() {
        let cli = Cli::try_parse_from(["streamlist", "run", "--pick", "2", "--format", "json"]).unwrap();

        match cli.into_command() {
            Commands::Run { seed, pick, format } => {
                assert!(seed.is_none());
                assert_eq!(pick, Some(ContentId::new(2)));
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("Expected Run, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_content_type_aliases() {
        let cases = [
            ("movie", ContentType::FeatureFilm),
            ("film", ContentType::FeatureFilm),
            ("Feature-Film", ContentType::FeatureFilm),
            ("series", ContentType::EpisodicSeries),
            ("show", ContentType::EpisodicSeries),
            ("doc", ContentType::Documentary),
            ("documentary", ContentType::Documentary),
        ];

        for (arg, expected) in cases {
            let cli = Cli::try_parse_from(["streamlist", "catalog", "--content-type", arg]).unwrap();
            match cli.into_command() {
                Commands::Catalog { content_type, .. } => assert_eq!(content_type, Some(expected)),
                other => panic!("Expected Catalog, got {:?}", other),
            }
        }

        assert!(Cli::try_parse_from(["streamlist", "catalog", "--content-type", "podcast"]).is_err());
    }

    #[test]
    fn test_parse_rejects_bad_pick() {
        assert!(Cli::try_parse_from(["streamlist", "run", "--pick", "abc"]).is_err());
    }

    #[test]
    fn test_run_text_output() {
        let output = render(|out| run_watch_list(Seed::builtin(), None, OutputFormat::Text, true, out));

        assert_eq!(
            output,
            "📺 Watchlist de Santi (standard):\n- Inception | feature-film | 148 min\n"
        );
    }

    #[test]
    fn test_run_json_output() {
        let output = render(|out| {
            run_watch_list(
                Seed::builtin(),
                Some(ContentId::new(2)),
                OutputFormat::Json,
                true,
                out,
            )
        });
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["user"], "Santi");
        assert_eq!(value["plan"], "standard");
        let items = value["items"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["id"], 2);
        assert_eq!(items[0]["title"], "Planet Earth");
        assert_eq!(items[0]["category"], "documentary");
    }

    #[test]
    fn test_run_unknown_pick_fails() {
        let mut buf = Vec::new();
        let err = run_watch_list(
            Seed::builtin(),
            Some(ContentId::new(42)),
            OutputFormat::Text,
            true,
            &mut buf,
        )
        .unwrap_err();

        assert!(err.to_string().contains("42"));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_catalog_table_lists_all() {
        let catalog = Seed::builtin().catalog;
        let output = render(|out| list_catalog(&catalog, false, None, out));

        assert!(output.starts_with("ID "));
        assert!(output.contains("Breaking Code"));
        assert!(output.contains("Total: 3 items"));
    }

    #[test]
    fn test_catalog_table_available_and_type() {
        let catalog = Seed::builtin().catalog;
        let output = render(|out| list_catalog(&catalog, true, Some(ContentType::FeatureFilm), out));

        let rows: Vec<&str> = output.lines().filter(|l| l.contains(" yes ")).collect();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].starts_with("1 "));
        assert!(rows[0].contains("feature-film"));
        assert!(rows[0].contains("148"));
        assert!(rows[0].contains("Inception"));
        assert!(output.contains("Total: 1 items"));
    }

    #[test]
    fn test_catalog_table_no_matches() {
        let catalog = Seed::builtin().catalog;
        let output = render(|out| list_catalog(&catalog, true, Some(ContentType::EpisodicSeries), out));

        assert_eq!(output, "No content matches.\n");
    }

    #[test]
    fn test_show_config_output() {
        let cfg = ResolvedConfig {
            home: PathBuf::from("/tmp/home"),
            seed_file: None,
            config_file: None,
            display: DisplaySettings { show_icon: false },
        };
        let output = render(|out| show_config(&cfg, out));

        assert!(output.contains("(none - using defaults)"));
        assert!(output.contains("Home:        /tmp/home"));
        assert!(output.contains("Seed:        (built-in)"));
        assert!(output.contains("Icon: off"));
    }

    #[test]
    fn test_show_icon_falls_back_on_config_error() {
        assert!(show_icon(Err(anyhow::anyhow!("broken config"))));

        let cfg = ResolvedConfig {
            home: PathBuf::from("/tmp/home"),
            seed_file: None,
            config_file: None,
            display: DisplaySettings { show_icon: false },
        };
        assert!(!show_icon(Ok(&cfg)));
    }
}
