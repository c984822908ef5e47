//! Command-line interface for wikidoc.

use std::path::PathBuf;

use clap::{Args, Parser as ClapParser, Subcommand};
use console::style;
use textwrap::{fill, Options};

use crate::config::{
    validate_level_range, DEFAULT_SUMMARY_LENGTH, DEFAULT_TOC_MAX_LEVEL, DEFAULT_TOC_MIN_LEVEL,
    TEXT_WRAP_WIDTH,
};
use crate::error::Result;
use crate::extract::{search_sections, SearchMatch, SearchOptions, SearchResult};
use crate::model::{Document, ElementKind, Section};
use crate::parser::Parser;
use crate::source::{load_document, FilePageSource};

/// Wikidoc - Outline, search and extract wiki storage-format pages.
#[derive(ClapParser)]
#[command(name = "wikidoc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Page to read.
#[derive(Args)]
pub struct PageArgs {
    /// Storage-format markup file
    pub file: PathBuf,

    /// Document title (default: file name without extension)
    #[arg(short, long)]
    pub title: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the section outline.
    Outline {
        #[command(flatten)]
        page: PageArgs,

        /// Print the outline as YAML
        #[arg(long)]
        yaml: bool,
    },

    /// Print the table of contents for a range of heading levels.
    Toc {
        #[command(flatten)]
        page: PageArgs,

        /// Shallowest heading level to include
        #[arg(long, default_value_t = DEFAULT_TOC_MIN_LEVEL)]
        min: u8,

        /// Deepest heading level to include
        #[arg(long, default_value_t = DEFAULT_TOC_MAX_LEVEL)]
        max: u8,
    },

    /// Search the page for a literal query.
    Search {
        #[command(flatten)]
        page: PageArgs,

        /// Text to search for
        query: String,

        /// Match case exactly
        #[arg(long)]
        case_sensitive: bool,

        /// Only match whole words
        #[arg(long)]
        whole_word: bool,

        /// Element kind to match (repeatable, e.g. paragraph, heading)
        #[arg(long = "kind")]
        kinds: Vec<ElementKind>,
    },

    /// Print all text of the page.
    Text {
        #[command(flatten)]
        page: PageArgs,

        /// Wrap width
        #[arg(short, long, default_value_t = TEXT_WRAP_WIDTH)]
        width: usize,
    },

    /// Print a short summary of the page.
    Summary {
        #[command(flatten)]
        page: PageArgs,

        /// Maximum summary length in characters
        #[arg(short, long, default_value_t = DEFAULT_SUMMARY_LENGTH)]
        max_length: usize,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Outline { page, yaml } => outline_command(&load(&page)?, yaml),
        Commands::Toc { page, min, max } => {
            validate_level_range(min, max)?;
            toc_command(&load(&page)?, min, max);
            Ok(())
        }
        Commands::Search {
            page,
            query,
            case_sensitive,
            whole_word,
            kinds,
        } => {
            let options = SearchOptions::new()
                .with_case_sensitive(case_sensitive)
                .with_whole_word(whole_word)
                .with_kinds(kinds);
            search_command(&load(&page)?, &query, &options);
            Ok(())
        }
        Commands::Text { page, width } => {
            text_command(&load(&page)?, width);
            Ok(())
        }
        Commands::Summary { page, max_length } => {
            println!("{}", load(&page)?.summary(max_length));
            Ok(())
        }
    }
}

fn load(page: &PageArgs) -> Result<Document> {
    let source = FilePageSource::default();
    let id = page.file.to_string_lossy();
    load_document(&source, &Parser::new(), &id, page.title.as_deref())
}

/// Execute the outline command.
fn outline_command(doc: &Document, yaml: bool) -> Result<()> {
    let sections = doc.sections();

    if yaml {
        print!("{}", serde_yaml_ng::to_string(&sections)?);
        return Ok(());
    }

    println!("{}", style(doc.title()).bold());
    print_sections(&sections, 1);
    Ok(())
}

/// Execute the toc command.
fn toc_command(doc: &Document, min: u8, max: u8) {
    let toc = doc.table_of_contents(min, max);

    println!(
        "{} {} (levels {min}-{max})",
        style("Contents of").bold(),
        style(doc.title()).cyan()
    );
    if toc.is_empty() {
        println!("  {}", style("No headings in range").dim());
        return;
    }
    print_sections(&toc, 1);
}

fn print_sections(sections: &[Section<'_>], depth: usize) {
    for section in sections {
        println!(
            "{}{} {}",
            "  ".repeat(depth),
            style(&section.title).green(),
            style(format!("#{}", section.id)).dim()
        );
        print_sections(&section.subsections, depth + 1);
    }
}

/// Execute the search command.
fn search_command(doc: &Document, query: &str, options: &SearchOptions) {
    let sections = doc.sections();
    let results = search_sections(&sections, query, options);

    if results.is_empty() {
        println!("{} for '{}'", style("No matches").yellow(), query);
        return;
    }

    let total: usize = results.iter().map(|r| r.matches.len()).sum();
    println!(
        "{} {} in {} elements",
        style(total).bold(),
        if total == 1 { "match" } else { "matches" },
        results.len()
    );

    for result in &results {
        let location = result
            .section
            .map(|section| section.path_string(" > "))
            .unwrap_or_default();
        println!();
        println!(
            "{} {}",
            style(result.element.kind()).cyan(),
            style(location).dim()
        );
        println!("  {}", highlight(&searched_text(result, options), &result.matches));
    }
}

/// The text the matches of a result index into.
fn searched_text(result: &SearchResult<'_>, options: &SearchOptions) -> String {
    match result.element.text() {
        Some(text) if options.include_kinds.is_empty() => text.to_string(),
        _ => result.element.plain_text(),
    }
}

fn highlight(text: &str, matches: &[SearchMatch]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for m in matches {
        let (Some(before), Some(hit)) = (text.get(last..m.start), text.get(m.start..m.end)) else {
            continue;
        };
        out.push_str(before);
        out.push_str(&style(hit).yellow().bold().to_string());
        last = m.end;
    }
    out.push_str(text.get(last..).unwrap_or_default());

    out
}

/// Execute the text command.
fn text_command(doc: &Document, width: usize) {
    let options = Options::new(width.max(1));
    for line in doc.full_content().lines() {
        println!("{}", fill(line, &options));
    }
}
