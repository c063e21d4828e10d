use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pmem::{FactoryCalibration, Settings};

mod image;
mod settings_file;

use settings_file::SettingsFile;

/// Build and inspect backup RAM settings images
#[derive(Parser, Debug)]
#[command(name = "pmem-image")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a region image from an HJSON settings file
    Build {
        /// Settings file; omitted keys take their defaults
        #[arg(short, long, value_name = "FILE")]
        config: PathBuf,

        /// Where to write the raw image
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Report invalid fields in a captured image and print the healed settings
    Dump {
        /// Raw region image
        #[arg(value_name = "FILE")]
        image: PathBuf,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,

        /// Also write the healed image here
        #[arg(long, value_name = "FILE")]
        heal: Option<PathBuf>,
    },
    /// Print the default settings as JSON
    Defaults,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match args.command {
        Command::Build { config, output } => build(&config, &output),
        Command::Dump { image, json, heal } => dump(&image, json, heal.as_deref()),
        Command::Defaults => {
            let defaults = SettingsFile::from(&Settings::defaults(&FactoryCalibration));
            println!("{}", serde_json::to_string_pretty(&defaults)?);
            Ok(())
        }
    }
}

fn build(config: &Path, output: &Path) -> Result<()> {
    let text = fs::read_to_string(config)
        .with_context(|| format!("Failed to read settings file '{}'", config.display()))?;
    let file = SettingsFile::from_hjson(&text)
        .with_context(|| format!("Failed to parse settings file '{}'", config.display()))?;

    let region = image::build(&file)?;
    fs::write(output, region.as_bytes())
        .with_context(|| format!("Failed to write image '{}'", output.display()))?;

    log::info!("wrote {} bytes to {}", image::IMAGE_SIZE, output.display());
    Ok(())
}

fn dump(path: &Path, json: bool, heal: Option<&Path>) -> Result<()> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read image '{}'", path.display()))?;
    if bytes.len() < image::IMAGE_SIZE {
        log::warn!(
            "{} is {} bytes, expected {}; missing bytes read as zero",
            path.display(),
            bytes.len(),
            image::IMAGE_SIZE
        );
    }

    let report = image::inspect(image::load(&bytes)?);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        if report.is_clean() {
            println!("All fields valid.");
        } else {
            println!("Invalid fields (repaired on read):");
            for name in &report.faults {
                println!("  {}", name);
            }
        }
        println!();
        println!("{}", serde_json::to_string_pretty(&report.settings)?);
    }

    if let Some(heal) = heal {
        fs::write(heal, report.healed.as_bytes())
            .with_context(|| format!("Failed to write image '{}'", heal.display()))?;
        log::info!("wrote healed image to {}", heal.display());
    }
    Ok(())
}
