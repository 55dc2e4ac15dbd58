//! hookdoc — extract docblock documentation from JS-like and PHP-like
//! sources and render it as Markdown for a static docs site.
//!
//! Two modes:
//!
//! - **stdin mode**: `hookdoc --dialect php < class-theme.php`
//! - **file mode**: `hookdoc -o docs/reference inc/ blocks/*.jsx`

mod config;
mod dialect;
mod extract;
mod fields;
mod model;
mod patterns;
mod render;

use anyhow::{bail, Context, Result};
use clap::Parser;
use config::Config;
use dialect::Dialect;
use patterns::PatternRegistry;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "hookdoc",
    about = "Generate Markdown documentation from docblock-annotated source files"
)]
struct Cli {
    /// Input files, directories, or glob patterns. If omitted, reads from stdin.
    files: Vec<String>,

    /// Output directory (required when files are given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Dialect for stdin input: php, js, markdown, default
    #[arg(long, default_value = "default")]
    dialect: String,

    /// Additional member names to exclude. Can be given multiple times.
    #[arg(long = "exclude-member")]
    exclude_members: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::default();
    config
        .excluded_members
        .extend(cli.exclude_members.iter().cloned());

    if cli.files.is_empty() {
        return stdin_mode(&cli, &config);
    }

    file_mode(&cli, &config)
}

/// stdin mode: read one source from stdin, write markdown to stdout.
fn stdin_mode(cli: &Cli, config: &Config) -> Result<()> {
    let Some(dialect) = Dialect::from_name(&cli.dialect) else {
        bail!("unknown dialect: {}. Use php, js, markdown, or default", cli.dialect);
    };

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let path = stdin_path(dialect);
    let doc = extract::extract(PatternRegistry::builtin(), config, path, &input);
    print!("{}", render::render(&doc));
    Ok(())
}

/// file mode: process every input file, write one .mdx per file.
fn file_mode(cli: &Cli, config: &Config) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when files are given")?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let registry = PatternRegistry::builtin();
    let input_files = expand_inputs(&cli.files, config)?;

    for path in &input_files {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        if config.excludes_file(&file_name) {
            continue;
        }

        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("warning: skipping {}: {}", path.display(), e);
                continue;
            }
        };

        let doc = extract::extract(registry, config, path, &text);
        // Nothing documentable — don't emit an empty page.
        if doc.members.is_empty() && doc.details.is_none() && doc.markdown.is_none() {
            continue;
        }

        let out_path = output_dir.join(format!("{}.mdx", derive_output_name(path)));
        fs::write(&out_path, render::render(&doc))
            .with_context(|| format!("failed to write {}", out_path.display()))?;
    }

    Ok(())
}

/// Synthetic path used to classify stdin input.
fn stdin_path(dialect: Dialect) -> &'static Path {
    Path::new(match dialect {
        Dialect::Php => "stdin.php",
        Dialect::Js => "stdin.js",
        Dialect::Markdown => "stdin.md",
        Dialect::Default => "stdin",
    })
}

/// Expand file, directory, and glob arguments into a sorted file list.
/// Directories are walked recursively, honoring the excluded-directory
/// list and skipping hidden entries.
fn expand_inputs(patterns: &[String], config: &Config) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        if path.is_dir() {
            collect_dir(path, config, &mut files)?;
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            eprintln!("warning: no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    files.sort();
    files.dedup();
    Ok(files)
}

fn collect_dir(dir: &Path, config: &Config, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("failed to read directory: {}", dir.display()))?;
    for entry in entries.flatten() {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().to_string();
        if path.is_dir() {
            if !config.excludes_directory(&name) {
                collect_dir(&path, config, files)?;
            }
        } else if path.is_file() && !name.starts_with('.') {
            files.push(path);
        }
    }
    Ok(())
}

/// Output file name (without extension) for a source path.
/// "inc/class-theme.php" → "class-theme"
fn derive_output_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}
