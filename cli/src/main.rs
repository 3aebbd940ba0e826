//! unform CLI - form-field and table extraction from analysis results

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use unform::{
    BlockType, CleanupPreset, FieldStyle, JsonFormat, Unform, UnformResult,
};

#[derive(Parser)]
#[command(name = "unform")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Extract form fields and tables from document-analysis results", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print resolved form fields
    Fields {
        /// Input analysis-result JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Print resolved tables
    Tables {
        /// Input analysis-result JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Convert the analysis result to Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input analysis-result JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Form-field rendering style
        #[arg(long, value_enum, default_value = "list")]
        field_style: FieldStyleArg,

        /// Omit section headings
        #[arg(long)]
        no_headings: bool,

        /// Text cleanup preset
        #[arg(long, value_enum)]
        cleanup: Option<CleanupLevel>,
    },

    /// Convert the analysis result to plain text
    Text {
        /// Input analysis-result JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Text cleanup preset
        #[arg(long, value_enum)]
        cleanup: Option<CleanupLevel>,
    },

    /// Convert the analysis result to structured JSON
    Json {
        /// Input analysis-result JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Include the verbatim block list alongside the structured output
        #[arg(long)]
        include_blocks: bool,
    },

    /// Show a census of the analysis result
    Info {
        /// Input analysis-result JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

/// Cleanup preset level for CLI.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CleanupLevel {
    /// Unicode normalization only
    Minimal,
    /// Normalization, ligatures, replacement chars, whitespace
    Standard,
    /// Maximum normalization
    Aggressive,
}

impl From<CleanupLevel> for CleanupPreset {
    fn from(level: CleanupLevel) -> Self {
        match level {
            CleanupLevel::Minimal => CleanupPreset::Minimal,
            CleanupLevel::Standard => CleanupPreset::Standard,
            CleanupLevel::Aggressive => CleanupPreset::Aggressive,
        }
    }
}

/// Form-field style for CLI.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FieldStyleArg {
    /// One bullet per field
    List,
    /// Two-column Field/Value table
    Table,
}

impl From<FieldStyleArg> for FieldStyle {
    fn from(style: FieldStyleArg) -> Self {
        match style {
            FieldStyleArg::List => FieldStyle::List,
            FieldStyleArg::Table => FieldStyle::Table,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Fields { input } => cmd_fields(&input),
        Commands::Tables { input } => cmd_tables(&input),
        Commands::Markdown {
            input,
            output,
            field_style,
            no_headings,
            cleanup,
        } => cmd_markdown(&input, output.as_deref(), field_style, no_headings, cleanup),
        Commands::Text {
            input,
            output,
            cleanup,
        } => cmd_text(&input, output.as_deref(), cleanup),
        Commands::Json {
            input,
            output,
            compact,
            include_blocks,
        } => cmd_json(&input, output.as_deref(), compact, include_blocks),
        Commands::Info { input } => cmd_info(&input),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_fields(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let result = Unform::new().resolve_file(input)?;
    let doc = result.document();

    if doc.form_fields.is_empty() {
        println!("{}", "No form fields resolved".yellow());
        return Ok(());
    }

    for (label, value) in &doc.form_fields {
        println!("{}: {}", label.cyan().bold(), value);
    }
    Ok(())
}

fn cmd_tables(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let result = Unform::new().resolve_file(input)?;
    let doc = result.document();

    if doc.tables.is_empty() {
        println!("{}", "No tables resolved".yellow());
        return Ok(());
    }

    for (i, table) in doc.tables.iter().enumerate() {
        println!(
            "{} ({}x{} declared, {} rows populated)",
            format!("Table {}", i + 1).cyan().bold(),
            table.row_count,
            table.column_count,
            table.populated_rows()
        );
        if !table.is_empty() {
            println!("{}", table.plain_text());
        }
        println!();
    }
    Ok(())
}

fn cmd_markdown(
    input: &Path,
    output: Option<&Path>,
    field_style: FieldStyleArg,
    no_headings: bool,
    cleanup: Option<CleanupLevel>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut unform = Unform::new().with_field_style(field_style.into());
    if no_headings {
        unform = unform.without_headings();
    }
    if let Some(level) = cleanup {
        unform = unform.with_cleanup(level.into());
    }

    let markdown = unform.resolve_file(input)?.to_markdown()?;
    write_output(&markdown, output)
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    cleanup: Option<CleanupLevel>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut unform = Unform::new();
    if let Some(level) = cleanup {
        unform = unform.with_cleanup(level.into());
    }

    let text = unform.resolve_file(input)?.to_text()?;
    write_output(&text, output)
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    include_blocks: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut unform = Unform::new();
    if include_blocks {
        unform = unform.with_raw_blocks();
    }

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = unform.resolve_file(input)?.to_json(format)?;
    write_output(&json, output)
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let result = Unform::new().resolve_file(input)?;
    let stats = result.stats();

    println!("{}", "Analysis result".cyan().bold());
    println!("  Blocks:        {}", result.blocks.len());
    println!("  Pages:         {}", count_kind(&result, BlockType::Page));
    println!("  Lines:         {}", count_kind(&result, BlockType::Line));
    println!("  Words:         {}", count_kind(&result, BlockType::Word));
    println!(
        "  Key/value:     {}",
        count_kind(&result, BlockType::KeyValueSet)
    );
    println!("  Tables:        {}", count_kind(&result, BlockType::Table));
    println!("  Cells:         {}", count_kind(&result, BlockType::Cell));

    println!("{}", "Resolved".cyan().bold());
    println!("  Form fields:   {}", stats.field_count);
    println!("  Tables:        {}", stats.table_count);
    println!("  Cells:         {}", stats.populated_cell_count);

    if let Some(mean) = mean_confidence(&result) {
        println!("  Confidence:    {:.1} (mean)", mean);
    }
    Ok(())
}

fn count_kind(result: &UnformResult, kind: BlockType) -> usize {
    result.blocks.iter().filter(|b| b.kind == kind).count()
}

fn mean_confidence(result: &UnformResult) -> Option<f32> {
    let scores: Vec<f32> = result.blocks.iter().filter_map(|b| b.confidence).collect();
    if scores.is_empty() {
        return None;
    }
    Some(scores.iter().sum::<f32>() / scores.len() as f32)
}

fn write_output(content: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => {
            fs::write(path, content)?;
            println!("{} {}", "Written:".green(), path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleanup_level_conversion() {
        assert!(matches!(
            CleanupPreset::from(CleanupLevel::Aggressive),
            CleanupPreset::Aggressive
        ));
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.md");
        write_output("content", Some(&path)).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "content");
    }
}
