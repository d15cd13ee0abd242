//! palette-draft - CLI front end for the palette draft engine.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use palette_draft::config::is_known_level;
use palette_draft::{
    DraftBuilder, DraftConfig, Palette, PaletteStore, ShadedPalette, ViewSelection,
    DEFAULT_LEVEL, DEFAULT_MAX_COLORS,
};

/// Build and view color palettes.
#[derive(Parser, Debug)]
#[command(name = "palette-draft")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draft a new palette and save it
    New(NewArgs),
    /// Show a saved palette at a shade level and format
    View(ViewArgs),
}

#[derive(Args, Debug)]
struct NewArgs {
    /// Saved palettes file (JSON array); created if missing
    #[arg(short, long)]
    registry: PathBuf,

    /// Name of the new palette
    #[arg(short, long)]
    name: String,

    /// Start empty instead of from the first saved palette
    #[arg(long)]
    empty: bool,

    /// Color to add, as NAME=HEX (repeatable)
    #[arg(short, long = "color", value_parser = parse_color)]
    colors: Vec<(String, String)>,

    /// Number of random colors to pick from saved palettes
    #[arg(long, default_value_t = 0)]
    random: usize,

    /// Seed for random picks
    #[arg(long)]
    seed: Option<u64>,

    /// Run the uniqueness rules on random picks and fail on duplicates
    #[arg(long)]
    strict_random: bool,

    /// Color id to remove (repeatable)
    #[arg(long = "remove")]
    removals: Vec<String>,

    /// Reorder step, as FROM:TO (repeatable)
    #[arg(long = "move", value_parser = parse_move)]
    moves: Vec<(usize, usize)>,

    /// Maximum number of colors
    #[arg(long, default_value_t = DEFAULT_MAX_COLORS)]
    max_colors: usize,

    /// Write the palette here instead of appending it to the registry
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ViewArgs {
    /// Shaded palette file (JSON)
    #[arg(short, long)]
    palette: PathBuf,

    /// Shade level
    #[arg(short, long, default_value_t = DEFAULT_LEVEL)]
    level: u16,

    /// Output format: hex, rgb or rgba
    #[arg(short, long, default_value = "hex")]
    format: String,

    /// Print records as JSON
    #[arg(long)]
    json: bool,
}

fn parse_color(s: &str) -> std::result::Result<(String, String), String> {
    let (name, value) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=HEX, got '{}'", s))?;
    Ok((name.to_string(), value.trim().to_string()))
}

fn parse_move(s: &str) -> std::result::Result<(usize, usize), String> {
    let (from, to) = s
        .split_once(':')
        .ok_or_else(|| format!("expected FROM:TO, got '{}'", s))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<usize>()
            .map_err(|e| format!("invalid index '{}': {}", v, e))
    };
    Ok((parse(from)?, parse(to)?))
}

/// Registry of saved palettes backed by a JSON file.
struct JsonFileStore {
    path: PathBuf,
    palettes: Vec<Palette>,
}

impl JsonFileStore {
    fn open(path: &Path) -> Result<Self> {
        let palettes = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        } else {
            warn!("Registry {} not found, starting empty", path.display());
            Vec::new()
        };
        Ok(Self {
            path: path.to_path_buf(),
            palettes,
        })
    }

    fn flush(&self) -> Result<()> {
        write_json(&self.path, &self.palettes)
    }
}

impl PaletteStore for JsonFileStore {
    fn palettes(&self) -> &[Palette] {
        &self.palettes
    }

    fn save_palette(&mut self, palette: Palette) {
        self.palettes.push(palette);
    }
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}

fn run_new(args: NewArgs) -> Result<()> {
    let mut store = JsonFileStore::open(&args.registry)?;
    info!("Loaded {} saved palette(s)", store.palettes().len());

    let config = DraftConfig {
        max_colors: args.max_colors,
        validate_random_picks: args.strict_random,
    };
    let mut draft = match store.palettes().first() {
        Some(first) if !args.empty => {
            info!("Seeding draft from '{}'", first.palette_name);
            DraftBuilder::from_seed(config, &first.colors)
        }
        _ => DraftBuilder::new(config),
    };

    for id in &args.removals {
        if !draft.remove_color(id)? {
            warn!("No color with id '{}'", id);
        }
    }

    for (name, value) in &args.colors {
        draft.set_pending_color(value.as_str())?;
        match draft.add_color(name) {
            Ok(entry) => info!("Added {} {}", entry.name, entry.value),
            Err(e) if e.is_user_facing() => warn!("Skipped '{}': {}", name, e),
            Err(e) => return Err(e.into()),
        }
    }

    let mut rng = StdRng::seed_from_u64(args.seed.unwrap_or_else(rand::random));
    for _ in 0..args.random {
        match draft.add_random_color(store.palettes(), &mut rng) {
            Ok(Some(entry)) => info!("Picked {} {}", entry.name, entry.value),
            Ok(None) => {
                warn!("No saved colors to pick from");
                break;
            }
            Err(e) if e.is_user_facing() => {
                warn!("Random pick rejected: {}", e);
                if draft.is_full() {
                    break;
                }
            }
            Err(e) => return Err(e.into()),
        }
    }

    for &(from, to) in &args.moves {
        draft
            .reorder(from, to)
            .with_context(|| format!("Failed to move {} to {}", from, to))?;
    }

    let audit = draft.audit();
    for warning in &audit.warnings {
        warn!("{}", warning);
    }
    for err in &audit.errors {
        error!("{}", err);
    }
    if !audit.passed {
        anyhow::bail!("Validation failed");
    }

    draft.set_working_name(args.name.as_str())?;
    let palette = match &args.output {
        Some(output) => {
            let palette = draft.commit(store.palettes())?;
            write_json(output, &palette)?;
            info!("Generated: {}", output.display());
            palette
        }
        None => {
            let palette = draft.commit_to(&mut store)?;
            store.flush()?;
            info!("Saved to {}", args.registry.display());
            palette
        }
    };

    info!(
        "Palette '{}' ({}) with {} color(s)",
        palette.palette_name,
        palette.id,
        palette.colors.len()
    );
    Ok(())
}

fn run_view(args: ViewArgs) -> Result<()> {
    let content = std::fs::read_to_string(&args.palette)
        .with_context(|| format!("Failed to read {}", args.palette.display()))?;
    let palette: ShadedPalette = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", args.palette.display()))?;

    if !is_known_level(args.level) {
        warn!("Level {} is not a standard shade level", args.level);
    }
    let selection = ViewSelection::parse(args.level, &args.format)?;
    let records = palette.project(&selection)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for record in &records {
            println!("{} {} {}", record.name, record.display_value, record.color_url);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::New(args) => run_new(args),
        Command::View(args) => run_view(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(
            parse_color("Sky Blue=#87ceeb").unwrap(),
            ("Sky Blue".to_string(), "#87ceeb".to_string())
        );
        assert!(parse_color("nohex").is_err());
    }

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_move("0:2").unwrap(), (0, 2));
        assert!(parse_move("0-2").is_err());
        assert!(parse_move("a:2").is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
