use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use triedict::cli::output::{self, OutputFormat};
use triedict::{dict, edit_distance, Config, SpellChecker, Trie};

#[derive(Parser, Debug)]
#[command(name = "triedict")]
#[command(version, about = "Prefix-tree dictionary with autocompletion and spelling suggestions", long_about = None)]
struct Cli {
    /// Word list to load, one word per line (repeatable)
    #[arg(short, long = "words", value_name = "FILE", global = true)]
    word_lists: Vec<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text", global = true)]
    format: OutputFormat,

    /// Pattern to ignore when checking files (regex)
    #[arg(long, global = true)]
    ignore_pattern: Vec<String>,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check whether words are in the dictionary
    Search {
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// List every word starting with a prefix
    Complete { prefix: String },
    /// Suggest dictionary words within edit distance 2
    Suggest { word: String },
    /// List every word in the dictionary
    Words,
    /// Print the structure of the trie
    Tree,
    /// Check files for words missing from the dictionary
    Check {
        #[arg(value_name = "FILES", required = true)]
        files: Vec<PathBuf>,

        /// Exit with code 0 even if errors are found
        #[arg(long)]
        no_fail: bool,
    },
    /// Print the Levenshtein distance between two strings
    Distance { a: String, b: String },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "triedict", &mut io::stdout());
        return Ok(());
    }

    let Some(command) = cli.command else {
        anyhow::bail!("No command specified. Use --help for usage information.");
    };

    let config = Config::load(cli.word_lists.clone(), cli.ignore_pattern.clone())?;
    let colored = !cli.no_color;

    let trie = if matches!(command, Commands::Distance { .. }) {
        Trie::new()
    } else {
        load_dictionary(&config)?
    };

    let normalize = |word: &str| {
        if config.case_sensitive {
            word.to_string()
        } else {
            word.to_lowercase()
        }
    };

    match command {
        Commands::Search { words } => {
            let results: Vec<(String, bool)> = words
                .into_iter()
                .map(|word| {
                    let found = trie.search(&normalize(&word));
                    (word, found)
                })
                .collect();
            output::print_search(&results, colored, cli.format)?;

            if results.iter().any(|(_, found)| !found) {
                std::process::exit(1);
            }
        }
        Commands::Complete { prefix } => {
            output::print_words(&trie.auto_suggest(&normalize(&prefix)), cli.format)?;
        }
        Commands::Suggest { word } => {
            let suggestions = trie.spelling_suggestions(&normalize(&word))?;
            output::print_words(&suggestions, cli.format)?;
        }
        Commands::Words => {
            output::print_words(&trie.all_words(), cli.format)?;
        }
        Commands::Tree => {
            print!("{}", trie.dump());
        }
        Commands::Check { files, no_fail } => {
            let summary = check_files(trie, &config, &files, colored, cli.format)?;

            // Unreadable files fail the run even with --no-fail
            if summary.failed_files > 0 {
                anyhow::bail!(
                    "{} of {} files could not be checked",
                    summary.failed_files,
                    files.len()
                );
            }

            if cli.format == OutputFormat::Text {
                output::print_check_summary(summary.errors, &files, colored);
            }

            if summary.errors > 0 && !no_fail {
                std::process::exit(1);
            }
        }
        Commands::Distance { a, b } => {
            println!("{}", edit_distance(&a, &b));
        }
    }

    Ok(())
}

fn load_dictionary(config: &Config) -> Result<Trie> {
    let (trie, report) = dict::build_trie(&config.word_lists, config.case_sensitive)?;
    log::info!(
        "dictionary ready: {} words ({} duplicates skipped)",
        trie.len(),
        report.duplicates
    );
    Ok(trie)
}

struct CheckSummary {
    errors: usize,
    failed_files: usize,
}

fn check_files(
    trie: Trie,
    config: &Config,
    files: &[PathBuf],
    colored: bool,
    format: OutputFormat,
) -> Result<CheckSummary> {
    let checker = SpellChecker::new(trie, config);
    let mut summary = CheckSummary {
        errors: 0,
        failed_files: 0,
    };
    let mut json_report = Vec::new();

    for (path, result) in checker.check_files(files) {
        match result {
            Ok(result) => {
                summary.errors += result.error_count;
                output::print_errors(&path, &result, colored, format, &mut json_report);
            }
            Err(e) => {
                log::error!("{:#}", e);
                summary.failed_files += 1;
            }
        }
    }

    if format == OutputFormat::Json {
        output::print_json_report(&json_report)?;
    }

    Ok(summary)
}
