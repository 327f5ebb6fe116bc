use crate::CheckResult;
use anyhow::Result;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonError {
    pub file: String,
    pub line: usize,
    pub column: usize,
    pub word: String,
    pub suggestions: Vec<String>,
    pub context: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonSearch {
    word: String,
    found: bool,
}

pub fn print_errors(
    file_path: &Path,
    result: &CheckResult,
    colored_output: bool,
    format: OutputFormat,
    report: &mut Vec<JsonError>,
) {
    match format {
        OutputFormat::Text => print_text_errors(file_path, result, colored_output),
        OutputFormat::Json => report.extend(json_errors(file_path, result)),
    }
}

fn print_text_errors(file_path: &Path, result: &CheckResult, colored_output: bool) {
    if result.errors.is_empty() {
        return;
    }

    let file_name = file_path.display().to_string();

    if colored_output {
        println!("\n{}", file_name.bold().underline());
    } else {
        println!("\n{}", file_name);
    }

    for error in &result.errors {
        let line_info = format!("{}:{}", error.line, error.column);

        if colored_output {
            println!(
                "  {} {} {}",
                line_info.blue().bold(),
                error.word.red().bold(),
                error.context.dimmed()
            );
        } else {
            println!("  {} {} {}", line_info, error.word, error.context);
        }

        if error.suggestions.is_empty() {
            continue;
        }

        if colored_output {
            let suggestions = error
                .suggestions
                .iter()
                .map(|s| s.green().to_string())
                .collect::<Vec<_>>()
                .join(&", ".dimmed().to_string());
            println!("    {} {}", "→".dimmed(), suggestions);
        } else {
            println!("    → {}", error.suggestions.join(", "));
        }
    }
}

fn json_errors(file_path: &Path, result: &CheckResult) -> Vec<JsonError> {
    result
        .errors
        .iter()
        .map(|e| JsonError {
            file: file_path.display().to_string(),
            line: e.line,
            column: e.column,
            word: e.word.clone(),
            suggestions: e.suggestions.clone(),
            context: e.context.clone(),
        })
        .collect()
}

/// Print the errors of every checked file as one JSON array
pub fn print_json_report(errors: &[JsonError]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(errors)?);
    Ok(())
}

/// Print a word listing, one per line or as a JSON array
pub fn print_words(words: &[String], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for word in words {
                println!("{}", word);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(words)?),
    }
    Ok(())
}

pub fn print_search(results: &[(String, bool)], colored: bool, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        let json: Vec<JsonSearch> = results
            .iter()
            .map(|(word, found)| JsonSearch {
                word: word.clone(),
                found: *found,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    for (word, found) in results {
        match (found, colored) {
            (true, true) => println!("{} {}", "✓".green().bold(), word),
            (false, true) => println!("{} {}", "✗".red().bold(), word.red()),
            (true, false) => println!("✓ {}", word),
            (false, false) => println!("✗ {}", word),
        }
    }
    Ok(())
}

pub fn print_check_summary(total_errors: usize, files: &[impl AsRef<Path>], colored: bool) {
    println!();
    if total_errors == 0 {
        if colored {
            println!("{}", "✓ No spelling errors found!".green().bold());
        } else {
            println!("✓ No spelling errors found!");
        }
        return;
    }

    let error_word = if total_errors == 1 { "error" } else { "errors" };
    let file_word = if files.len() == 1 { "file" } else { "files" };
    if colored {
        println!(
            "{} {} {} found in {} {}",
            "✗".red().bold(),
            total_errors.to_string().red().bold(),
            error_word,
            files.len(),
            file_word
        );
    } else {
        println!(
            "✗ {} {} found in {} {}",
            total_errors,
            error_word,
            files.len(),
            file_word
        );
    }
}
