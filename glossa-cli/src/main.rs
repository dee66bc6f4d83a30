//! Glossa command-line driver.
//!
//! A thin shell around `glossa-core`: it reads bytes, hands them to the
//! identification pipeline, and formats the outcome. All the interesting
//! logic lives in the core crate.

mod store;

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use glossa_core::analyzer::decode::decode_text;
use glossa_core::profile::build_trigram_profile;
use glossa_core::{identify_language, rank_languages};
use glossa_types::Text;

#[derive(Parser)]
#[command(name = "glossa", version, about = "Trigram-based language identification")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Identify the language of a text file (or stdin).
    Identify {
        /// Directory of reference profiles.
        #[arg(long, default_value = "profiles")]
        profiles: PathBuf,
        /// Print every candidate with its score instead of the best match.
        #[arg(long)]
        all: bool,
        /// Input file; reads stdin when omitted.
        file: Option<PathBuf>,
    },
    /// Build a reference profile from corpus files (or stdin).
    Profile {
        /// Language code the profile is for.
        #[arg(long)]
        code: String,
        /// Output path; defaults to `<code>.profile`.
        #[arg(long)]
        output: Option<PathBuf>,
        /// Corpus files; reads stdin when omitted.
        corpus: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    match Cli::parse().command {
        Command::Identify {
            profiles,
            all,
            file,
        } => identify(&profiles, all, file.as_deref()),
        Command::Profile {
            code,
            output,
            corpus,
        } => profile(&code, output, &corpus),
    }
}

fn identify(profiles_dir: &Path, all: bool, file: Option<&Path>) -> Result<()> {
    let languages = store::load_profiles(profiles_dir)?;
    let text = read_text(file)?;
    log::debug!("identifying {} lines", text.len());

    if all {
        for candidate in rank_languages(&text, &languages) {
            println!("{candidate}");
        }
        return Ok(());
    }

    match identify_language(&text, &languages) {
        Some(best) => {
            log::debug!("best match: {best}");
            println!("{}", best.code);
        }
        None => println!("no similar language found"),
    }
    Ok(())
}

fn profile(code: &str, output: Option<PathBuf>, corpus: &[PathBuf]) -> Result<()> {
    let mut lines = Vec::new();
    if corpus.is_empty() {
        lines.extend(read_text(None)?.into_lines());
    } else {
        for path in corpus {
            lines.extend(read_text(Some(path))?.into_lines());
        }
    }

    let profile = build_trigram_profile(&Text::from_lines(lines));
    if profile.is_empty() {
        bail!("corpus produced no trigrams; every line is shorter than 3 characters");
    }

    let output = output.unwrap_or_else(|| PathBuf::from(format!("{code}.{}", store::PROFILE_EXTENSION)));
    store::save_profile(&output, &profile)
}

/// Reads and decodes a file, or stdin when no path is given.
fn read_text(file: Option<&Path>) -> Result<Text> {
    let bytes = match file {
        Some(path) => fs::read(path).with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };

    decode_text(&bytes).map_err(anyhow::Error::from)
}
