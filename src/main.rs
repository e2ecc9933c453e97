use std::path::{Path, PathBuf};
use std::process::ExitCode;

use aoe2_rms::config::Config;
use aoe2_rms::error::RmsError;
use aoe2_rms::logging::{self, LogFormat};
use aoe2_rms::maps;
use clap::{Parser as ClapParser, Subcommand};
use tracing::{error, info, warn};

#[derive(ClapParser)]
#[command(author, version, about = "Random Map Script debugger")]
struct Cli {
    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact, global = true)]
    log_format: LogFormat,

    /// Log debug output, twice for trace output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the tokens of a map script
    Tokens {
        /// Path of the script
        file: PathBuf,
        /// Print the tokens as JSON
        #[arg(long)]
        json: bool,
        /// Include whitespace tokens
        #[arg(long)]
        all: bool,
    },
    /// Write debug html files for scripts in the maps directory
    Html {
        /// Name of the map to transform, with or without the .rms extension. All maps are
        /// transformed if omitted.
        name: Option<String>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Write a config file with defaults
    Init,
    /// Print the path of the config file
    Path,
}

fn print_tokens(file: &Path, json: bool, all: bool) -> Result<(), RmsError> {
    let stream = maps::tokenize_file(file)?;
    if json {
        println!("{}", stream.to_json()?);
        return Ok(());
    }
    for token in stream.iter().filter(|t| all || !t.is_whitespace()) {
        println!("{}", token);
    }
    Ok(())
}

fn write_html(name: Option<&str>, config: &Config) -> Result<(), RmsError> {
    let scripts = match name {
        Some(name) => vec![maps::find_map(&config.maps_dir, name)?],
        None => maps::get_rms_files(&config.maps_dir)?,
    };

    let results = maps::render_maps(&scripts, &config.out_dir, &config.style_path)?;
    let mut failed = 0;
    for (path, result) in scripts.iter().zip(results) {
        match result {
            Ok(output) => println!("{} -> {}", path.display(), output.display()),
            Err(e) => {
                failed += 1;
                error!(target: "rms::cli", file = %path.display(), error = %e, "Could not render map");
            }
        }
    }
    info!(target: "rms::cli", rendered = scripts.len() - failed, failed, "Done");
    if failed > 0 {
        return Err(RmsError::RenderFailed {
            failed,
            total: scripts.len(),
        });
    }
    Ok(())
}

fn run(cli: Cli, config: Config) -> Result<(), RmsError> {
    match cli.command {
        Commands::Tokens { file, json, all } => print_tokens(&file, json, all)?,
        Commands::Html { name } => write_html(name.as_deref(), &config)?,
        Commands::Config { command } => match command {
            ConfigCommands::Show => println!("{}", serde_json::to_string_pretty(&config)?),
            ConfigCommands::Init => {
                let config_path = Config::get_config_path();
                if config_path.exists() {
                    println!("Config file already exists at: {}", config_path.display());
                    println!("Remove the file to reinitialize.");
                } else {
                    Config::default().save()?;
                    println!("Initialized new config file at: {}", config_path.display());
                }
            }
            ConfigCommands::Path => println!("{}", Config::get_config_path().display()),
        },
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let loaded = Config::load();
    let config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => Config::default(),
    };

    let level = match cli.verbose {
        0 => config.log_level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    logging::init(level, cli.log_format);
    if let Err(e) = loaded {
        warn!(
            target: "rms::cli",
            path = %Config::get_config_path().display(),
            error = %e,
            "Ignoring config file, using defaults"
        );
    }

    match run(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
