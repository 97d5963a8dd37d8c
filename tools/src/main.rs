//! stenolex: search steno dictionaries and show what their translations do.
//!
//! ```text
//! stenolex --dict main.json lookup cat
//! stenolex --config stenolex.toml lookup --by stroke KAT
//! stenolex lex '{^ing}'
//! ```

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use stenolex_core::{
    Config, DictionaryConfig, Lexicon, LookupEngine, LookupMethod, SearchResults, Translation,
};
use stenolex_directives::{describe, lex, render, Directive};

#[derive(Parser)]
#[command(name = "stenolex", version, about = "Steno dictionary lookup")]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Dictionary to search, after the configured ones (repeatable)
    #[arg(long = "dict", value_name = "PATH", global = true)]
    dicts: Vec<PathBuf>,

    /// Dictionary to load switched off, after the configured ones (repeatable)
    #[arg(long = "disable", value_name = "PATH", global = true)]
    disabled: Vec<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Debug logging on stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search the dictionary stack for a translation or an outline
    Lookup {
        text: String,

        #[arg(long, value_enum, default_value_t = By::Translation)]
        by: By,
    },
    /// Show the directives in a translation
    Lex { text: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum By {
    Translation,
    Stroke,
}

impl From<By> for LookupMethod {
    fn from(by: By) -> Self {
        match by {
            By::Translation => LookupMethod::Translation,
            By::Stroke => LookupMethod::Stroke,
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Command-line paths are relative to the working directory, not to the
/// configured dictionary root.
fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("resolve working directory")?;
    Ok(cwd.join(path))
}

fn build_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_toml(path)?,
        None => Config::default(),
    };
    for (paths, enabled) in [(&cli.dicts, true), (&cli.disabled, false)] {
        for path in paths {
            config.dictionaries.push(DictionaryConfig {
                path: absolute(path)?,
                enabled,
            });
        }
    }
    Ok(config)
}

fn run_lookup(cli: &Cli, text: &str, by: By) -> Result<()> {
    let config = build_config(cli)?;
    if config.dictionaries.is_empty() {
        bail!("no dictionaries to search: pass --dict or list them in --config");
    }
    let dicts: Vec<Lexicon> = config.load_dictionaries()?;
    tracing::debug!(dictionaries = dicts.len(), "dictionary stack loaded");

    let engine = LookupEngine::new(config);
    let results = engine.search(&dicts, by.into(), text);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_results(&results);
    }
    Ok(())
}

fn outlines_text(t: &Translation) -> String {
    t.outlines
        .iter()
        .map(|o| o.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Marks a short result whose outlines are all shadowed or switched off.
fn short_mark(word: &Translation) -> &'static str {
    if word.bad {
        " (inactive)"
    } else {
        ""
    }
}

fn print_results(results: &SearchResults) {
    let mut printed = false;
    for group in &results.groups {
        if group.short.is_empty() && group.full.is_empty() {
            continue;
        }
        printed = true;
        for word in &group.short {
            println!("{}{}  {}", word.translation, short_mark(word), outlines_text(word));
        }
        if group.short.is_empty() {
            println!("{}", group.key);
        }
        for row in &group.full {
            let mut line = format!(
                "    {:<10} {:<20} {:<14} {}",
                row.reason.name(),
                outlines_text(row),
                row.dictionary.as_deref().unwrap_or("-"),
                describe(&row.translation).join(" | "),
            );
            if let Some(comment) = &row.comment {
                line.push_str("  # ");
                line.push_str(comment);
            }
            println!("{}", line.trim_end());
        }
    }
    if !printed {
        println!("no results");
    }
}

#[derive(Serialize)]
struct LexRow<'a> {
    directive: &'a Directive,
    label: String,
}

fn run_lex(cli: &Cli, text: &str) -> Result<()> {
    let directives = lex(text);
    if cli.json {
        let rows: Vec<LexRow<'_>> = directives
            .iter()
            .map(|d| LexRow {
                directive: d,
                label: render(d),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for d in &directives {
            println!("{:<14} {}", d.kind(), render(d));
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Command::Lookup { text, by } => run_lookup(&cli, text, *by),
        Command::Lex { text } => run_lex(&cli, text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_defaults_to_translation() {
        let cli = Cli::try_parse_from(["stenolex", "--dict", "a.json", "lookup", "cat"]).unwrap();
        match cli.command {
            Command::Lookup { text, by } => {
                assert_eq!(text, "cat");
                assert_eq!(by, By::Translation);
            }
            Command::Lex { .. } => panic!("expected lookup"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "stenolex", "lookup", "--by", "stroke", "KAT", "--dict", "a.json", "--disable", "b.json", "--json",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.dicts, vec![PathBuf::from("a.json")]);
        assert_eq!(cli.disabled, vec![PathBuf::from("b.json")]);
    }

    #[test]
    fn cli_dictionaries_follow_configured_ones() {
        let cli = Cli::try_parse_from([
            "stenolex", "--dict", "/d/a.json", "--disable", "/d/b.json", "lex", "x",
        ])
        .unwrap();
        let config = build_config(&cli).unwrap();
        assert_eq!(config.dictionaries.len(), 2);
        assert!(config.dictionaries[0].enabled);
        assert!(!config.dictionaries[1].enabled);
        assert_eq!(config.dictionaries[1].path, PathBuf::from("/d/b.json"));
    }

    #[test]
    fn bad_short_results_are_marked_inactive() {
        let word = Translation {
            translation: "cat".into(),
            bad: true,
            ..Default::default()
        };
        assert_eq!(short_mark(&word), " (inactive)");
        assert_eq!(short_mark(&Translation::default()), "");
    }

    #[test]
    fn lookup_without_dictionaries_fails() {
        let cli = Cli::try_parse_from(["stenolex", "lookup", "cat"]).unwrap();
        assert!(run_lookup(&cli, "cat", By::Translation).is_err());
    }
}
