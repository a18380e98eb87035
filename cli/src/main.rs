mod error_formatter;
mod formatter;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use formatter::{CheckFailure, Formatter};
use ieml::{Dictionary, Ieml, IemlError, IemlParser, ResourceLimits};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "ieml")]
#[command(about = "Parse and validate IEML expressions.")]
#[command(
    long_about = "IEML is a semantic language whose expressions are trees built from the terms of a dictionary.\nThe CLI parses expressions, draws sentence trees, validates whole files of expressions and lists the dictionary."
)]
#[command(version)]
struct Cli {
    /// JSON dictionary file defining the terms
    #[arg(long, global = true, env = "IEML_DICTIONARY")]
    dictionary: Option<PathBuf>,
    /// Maximum number of distinct nodes in a sentence
    #[arg(long, global = true, default_value_t = ieml::MAX_NODES_IN_SENTENCE)]
    max_nodes: usize,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an expression and print its canonical form
    ///
    /// Any level is accepted: terms, words, sentences, super-sentences and texts.
    /// The canonical form is the one two equal expressions share, whatever order
    /// their clauses were written in.
    Parse {
        /// The expression to parse, e.g. "[([wa.])]"
        expression: String,
        /// Print the JSON rendering instead
        #[arg(short, long)]
        json: bool,
    },
    /// Draw a sentence or super-sentence as a tree
    ///
    /// Each branch goes from a substance to one of its attributes and is
    /// labelled with the mode of its clause.
    Graph {
        /// The sentence to draw
        expression: String,
    },
    /// Validate files of expressions (one per line)
    ///
    /// Empty lines and lines starting with '#' are skipped. A directory is
    /// searched recursively for .ieml files.
    Check {
        /// File or directory to check
        #[arg(default_value = ".")]
        path: PathBuf,
    },
    /// List the terms of the dictionary in their total order
    Terms,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Parse { expression, json } => parse_command(&cli, expression, *json),
        Commands::Graph { expression } => graph_command(&cli, expression),
        Commands::Check { path } => check_command(&cli, path),
        Commands::Terms => terms_command(&cli),
    };

    if let Err(e) = result {
        if let Some(ieml_err) = e.downcast_ref::<IemlError>() {
            eprintln!("{}", error_formatter::format_error(ieml_err));
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

fn parse_command(cli: &Cli, expression: &str, json: bool) -> Result<()> {
    let dictionary = load_dictionary(cli)?;
    let parser = IemlParser::with_limits(&dictionary, limits(cli));
    let ieml = parser.parse_source(expression, "<expression>")?;

    if json {
        let value = ieml::serializers::to_json(&ieml)?;
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print!("{}", Formatter::default().format_summary(&ieml));
    }

    Ok(())
}

fn graph_command(cli: &Cli, expression: &str) -> Result<()> {
    let dictionary = load_dictionary(cli)?;
    let parser = IemlParser::with_limits(&dictionary, limits(cli));
    let formatter = Formatter::default();

    match parser.parse_source(expression, "<expression>")? {
        Ieml::Sentence(sentence) => print!("{}", formatter.format_tree(&sentence)),
        Ieml::SuperSentence(sentence) => print!("{}", formatter.format_tree(&sentence)),
        other => bail!(
            "'graph' needs a sentence or a super-sentence, got a {}",
            other.kind()
        ),
    }

    Ok(())
}

fn check_command(cli: &Cli, path: &Path) -> Result<()> {
    let dictionary = load_dictionary(cli)?;
    let parser = IemlParser::with_limits(&dictionary, limits(cli));

    let files = collect_files(path)?;
    let mut checked = 0;
    let mut failures = Vec::new();

    for file in &files {
        let content = fs::read_to_string(file)
            .with_context(|| format!("cannot read {}", file.display()))?;

        for (n, line) in content.lines().enumerate() {
            let expression = line.trim();
            if expression.is_empty() || expression.starts_with('#') {
                continue;
            }
            checked += 1;

            let location = format!("{}:{}", file.display(), n + 1);
            if let Err(error) = parser.parse_source(expression, &location) {
                debug!(%location, %error, "expression rejected");
                failures.push(CheckFailure {
                    message: error_formatter::format_error(&error),
                    location,
                });
            }
        }
    }

    for failure in &failures {
        eprintln!("{}: {}", failure.location, failure.message);
    }
    print!(
        "{}",
        Formatter::default().format_check_report(&files, checked, &failures)
    );

    if !failures.is_empty() {
        return Err(anyhow!("{} expression(s) failed validation", failures.len()));
    }
    Ok(())
}

fn terms_command(cli: &Cli) -> Result<()> {
    let dictionary = load_dictionary(cli)?;
    print!("{}", Formatter::default().format_terms(&dictionary));
    Ok(())
}

fn limits(cli: &Cli) -> ResourceLimits {
    ResourceLimits::default().with_max_nodes_in_sentence(cli.max_nodes)
}

fn load_dictionary(cli: &Cli) -> Result<Dictionary> {
    let path = cli.dictionary.as_ref().ok_or_else(|| {
        anyhow!("no dictionary given: pass --dictionary <PATH> or set IEML_DICTIONARY")
    })?;
    let json = fs::read_to_string(path)
        .with_context(|| format!("cannot read dictionary {}", path.display()))?;
    let dictionary = Dictionary::from_json(&json)?;
    info!(
        path = %path.display(),
        terms = dictionary.len(),
        "loaded dictionary"
    );
    Ok(dictionary)
}

/// The file itself, or every .ieml file under a directory in path order
fn collect_files(path: &Path) -> Result<Vec<PathBuf>> {
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry?;
        if entry.path().extension().and_then(|s| s.to_str()) == Some("ieml") {
            files.push(entry.path().to_path_buf());
        }
    }
    Ok(files)
}
