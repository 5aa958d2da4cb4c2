//! Command-line front end for the Game of Life simulator

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use conway_life::{
    config::{CliOverrides, Settings},
    game_of_life::create_example_patterns,
    simulation::{Command, SimulationController},
    utils::{BoardFormatter, ColorOutput, FrameClock},
};
use std::io::BufRead;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "conway_life")]
#[command(about = "Conway's Game of Life on a bounded grid")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GlobalArgs {
    /// Configuration file path
    #[arg(short, long, global = true, default_value = "life.yaml")]
    config: PathBuf,

    /// Grid width (overrides config)
    #[arg(long, global = true)]
    width: Option<i32>,

    /// Grid height (overrides config)
    #[arg(long, global = true)]
    height: Option<i32>,

    /// Target frames per second (overrides config)
    #[arg(long, global = true)]
    fps: Option<u32>,

    /// Seed for randomize (overrides config)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session reading one command per line from stdin
    Play,

    /// Run the simulation for a number of frames, rendering each one
    Watch {
        /// Pattern file to start from (randomized board if omitted)
        #[arg(short, long)]
        pattern: Option<PathBuf>,

        /// Number of frames to run
        #[arg(short, long, default_value_t = 100)]
        frames: u64,

        /// Print a JSON status line per frame instead of the board
        #[arg(long)]
        json: bool,
    },

    /// Advance a pattern file a number of generations
    Evolve {
        /// Pattern file to load
        #[arg(short, long)]
        pattern: PathBuf,

        /// Number of generations
        #[arg(short, long, default_value_t = 1)]
        generations: u64,

        /// Write the resulting pattern here
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show the final board with coordinates
        #[arg(long)]
        show: bool,
    },

    /// Create a default configuration and example pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play => {
            let settings = load_settings(&cli.global)?;
            play_command(settings)
        }
        Commands::Watch { pattern, frames, json } => {
            let settings = load_settings(&cli.global)?;
            watch_command(settings, pattern, frames, json)
        }
        Commands::Evolve { pattern, generations, output, show } => {
            let settings = load_settings(&cli.global)?;
            evolve_command(settings, pattern, generations, output, show)
        }
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn load_settings(global: &GlobalArgs) -> Result<Settings> {
    let mut settings = Settings::load_or_default(&global.config)?;

    settings.merge_with_cli(&CliOverrides {
        width: global.width,
        height: global.height,
        fps: global.fps,
        seed: global.seed,
    });

    settings.validate().context("Configuration validation failed")?;
    Ok(settings)
}

fn render(controller: &SimulationController, fps: f64) {
    print!("{}", BoardFormatter::clear_screen());
    print!("{}", BoardFormatter::format_frame(controller.board(), &controller.status(fps)));
}

fn play_command(settings: Settings) -> Result<()> {
    let mut controller = settings.build_controller()?;
    render(&controller, 0.0);

    for line in std::io::stdin().lock().lines() {
        let line = line.context("Failed to read command")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                println!("{}", ColorOutput::error(&e.to_string()));
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }

        if let Err(e) = controller.apply(command) {
            println!("{}", ColorOutput::error(&e.to_string()));
            continue;
        }
        render(&controller, 0.0);
    }

    Ok(())
}

fn watch_command(settings: Settings, pattern: Option<PathBuf>, frames: u64, json: bool) -> Result<()> {
    let mut controller = settings.build_controller()?;
    match pattern {
        Some(path) => controller
            .load_existing(&path)
            .with_context(|| format!("Failed to load pattern from {}", path.display()))?,
        None => controller.randomize(settings.simulation.density),
    }
    controller.set_running(true);

    let mut clock = FrameClock::new(controller.target_fps());
    for _ in 0..frames {
        let elapsed = clock.tick();
        controller.tick(elapsed);

        if json {
            let status = controller.status(clock.measured_fps());
            println!("{}", serde_json::to_string(&status).context("Failed to serialize status")?);
        } else {
            render(&controller, clock.measured_fps());
        }
    }

    Ok(())
}

fn evolve_command(
    settings: Settings,
    pattern: PathBuf,
    generations: u64,
    output: Option<PathBuf>,
    show: bool,
) -> Result<()> {
    let controller = conway_life::evolve_pattern(&settings, &pattern, generations)?;
    let board = controller.board();

    println!(
        "{}",
        ColorOutput::success(&format!(
            "Evolved {} for {} generation(s): {} live cell(s) on {}x{}",
            pattern.display(),
            controller.generation(),
            board.live_count(),
            board.width(),
            board.height()
        ))
    );

    if show {
        println!("{}", BoardFormatter::format_board_with_coords(board));
    }

    if let Some(path) = output {
        controller
            .save(&path)
            .with_context(|| format!("Failed to save pattern to {}", path.display()))?;
        println!("Saved: {}", path.display());
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up Game of Life files..."));

    std::fs::create_dir_all(&directory)
        .with_context(|| format!("Failed to create directory {}", directory.display()))?;

    let config_path = directory.join("life.yaml");
    write_default_config(&config_path, force)?;

    let pattern_dir = directory.join("patterns");
    create_example_patterns(&pattern_dir).context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", pattern_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit {}", config_path.display());
    println!(
        "2. Run: conway_life --config {} watch --pattern {}",
        config_path.display(),
        pattern_dir.join("glider.txt").display()
    );

    Ok(())
}

fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        println!("Skipped: {} (already exists)", path.display());
        return Ok(());
    }
    Settings::default()
        .to_file(path)
        .context("Failed to create default configuration")?;
    println!("Created: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "conway_life",
            "--width",
            "80",
            "watch",
            "--frames",
            "5",
            "--fps",
            "30",
        ])
        .unwrap();

        assert_eq!(cli.global.width, Some(80));
        assert_eq!(cli.global.fps, Some(30));
        assert!(matches!(cli.command, Commands::Watch { frames: 5, json: false, .. }));
    }

    #[test]
    fn test_evolve_requires_pattern() {
        assert!(Cli::try_parse_from(["conway_life", "evolve"]).is_err());
    }

    #[test]
    fn test_watch_rejects_missing_pattern() {
        let temp_dir = tempdir().unwrap();
        let result = watch_command(
            Settings::default(),
            Some(temp_dir.path().join("typo.txt")),
            1,
            true,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("life.yaml").exists());
        assert!(temp_dir.path().join("patterns/glider.txt").exists());
    }

    #[test]
    fn test_load_settings_applies_overrides() {
        let temp_dir = tempdir().unwrap();
        let global = GlobalArgs {
            config: temp_dir.path().join("missing.yaml"),
            width: Some(25),
            height: None,
            fps: Some(4),
            seed: Some(9),
        };

        let settings = load_settings(&global).unwrap();
        assert_eq!(settings.board.width, 25);
        assert_eq!(settings.board.height, 30);
        assert_eq!(settings.simulation.target_fps, 4);
        assert_eq!(settings.simulation.seed, Some(9));
    }

    #[test]
    fn test_load_settings_rejects_bad_override() {
        let temp_dir = tempdir().unwrap();
        let global = GlobalArgs {
            config: temp_dir.path().join("missing.yaml"),
            width: Some(0),
            height: None,
            fps: None,
            seed: None,
        };
        assert!(load_settings(&global).is_err());
    }
}
