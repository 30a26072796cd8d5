//! propeval CLI - proposal evaluation tool
//!
//! Operates on JSON-serialized `DocumentModel` files as produced by an
//! external decoder.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use colored::Colorize;

use propeval::render::{key_info_to_markdown, to_json, to_markdown};
use propeval::{
    DocumentModel, EvaluationConfig, Evaluator, JsonFormat, WordListDictionary,
};

#[derive(Parser)]
#[command(name = "propeval")]
#[command(author = "sahel-labs")]
#[command(version)]
#[command(about = "Evaluate proposals against RFP expectations and organizational standards", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a proposal, optionally against an RFP
    #[command(alias = "eval")]
    Evaluate {
        /// Proposal document (JSON DocumentModel)
        #[arg(value_name = "PROPOSAL")]
        proposal: PathBuf,

        /// RFP document to check coverage against
        #[arg(short, long, value_name = "RFP")]
        rfp: Option<PathBuf>,

        /// Word list file for the spelling check (one word per line)
        #[arg(short, long, value_name = "FILE")]
        words: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Emit JSON instead of Markdown
        #[arg(long)]
        json: bool,

        /// Coverage match threshold (0-100)
        #[arg(long, default_value = "70")]
        threshold: u8,

        /// Disable parallel coverage scanning
        #[arg(long)]
        sequential: bool,
    },

    /// Score RFP expectation coverage only
    Coverage {
        /// RFP document (JSON DocumentModel)
        #[arg(value_name = "RFP")]
        rfp: PathBuf,

        /// Proposal document (JSON DocumentModel)
        #[arg(value_name = "PROPOSAL")]
        proposal: PathBuf,

        /// Coverage match threshold (0-100)
        #[arg(long, default_value = "70")]
        threshold: u8,
    },

    /// Extract key information from an RFP
    Extract {
        /// RFP document (JSON DocumentModel)
        #[arg(value_name = "RFP")]
        rfp: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Evaluate {
            proposal,
            rfp,
            words,
            output,
            json,
            threshold,
            sequential,
        } => cmd_evaluate(
            &proposal,
            rfp.as_deref(),
            words.as_deref(),
            output.as_deref(),
            json,
            threshold,
            sequential,
        ),
        Commands::Coverage {
            rfp,
            proposal,
            threshold,
        } => cmd_coverage(&rfp, &proposal, threshold),
        Commands::Extract { rfp, output } => cmd_extract(&rfp, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn load_document(path: &Path) -> Result<DocumentModel, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let doc: DocumentModel = serde_json::from_str(&content)
        .map_err(|e| propeval::Error::InvalidDocument(format!("{}: {e}", path.display())))?;
    log::debug!("loaded {} paragraphs from {}", doc.paragraphs.len(), path.display());
    Ok(doc)
}

fn build_evaluator(
    words: Option<&Path>,
    threshold: u8,
    sequential: bool,
) -> Result<Evaluator, Box<dyn std::error::Error>> {
    let mut config = EvaluationConfig::default().with_match_threshold(threshold);
    if sequential {
        config = config.sequential();
    }

    let mut evaluator = Evaluator::new().with_config(config);
    if let Some(path) = words {
        let content = fs::read_to_string(path)?;
        evaluator = evaluator.with_dictionary(Arc::new(WordListDictionary::from_word_list(
            &content,
        )));
    }
    Ok(evaluator)
}

fn cmd_evaluate(
    proposal_path: &Path,
    rfp_path: Option<&Path>,
    words: Option<&Path>,
    output: Option<&Path>,
    json: bool,
    threshold: u8,
    sequential: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let proposal = load_document(proposal_path)?;
    let rfp = rfp_path.map(load_document).transpose()?;

    let evaluator = build_evaluator(words, threshold, sequential)?;
    let report = evaluator.report(&proposal, rfp.as_ref())?;

    let rendered = if json {
        to_json(&report, JsonFormat::Pretty)?
    } else {
        to_markdown(&report)
    };
    write_output(output, &rendered)?;

    if output.is_some() {
        let score = report.standards.score;
        let summary = format!("Overall score: {score:.0}%");
        if score >= 80.0 {
            println!("{}", summary.green());
        } else {
            println!("{}", summary.yellow());
        }
    }

    Ok(())
}

fn cmd_coverage(
    rfp_path: &Path,
    proposal_path: &Path,
    threshold: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let rfp = load_document(rfp_path)?;
    let proposal = load_document(proposal_path)?;

    let evaluator = build_evaluator(None, threshold, false)?;
    let coverage = evaluator.coverage(&rfp, &proposal)?;

    println!(
        "{} {:.1}% ({} of {} expectations addressed)",
        "Coverage:".bold(),
        coverage.score_percent,
        coverage.addressed.len(),
        coverage.total()
    );
    for verdict in &coverage.missing {
        println!(
            "  {} [{}] {}",
            "missing".red(),
            verdict.expectation.section,
            verdict.expectation.text
        );
    }

    Ok(())
}

fn cmd_extract(
    rfp_path: &Path,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let rfp = load_document(rfp_path)?;
    let evaluator = Evaluator::new();
    let info = evaluator.key_info(&rfp)?;

    println!("{} {}", "RFP category:".bold(), info.category.label().cyan());
    write_output(output, &key_info_to_markdown(&info))?;

    Ok(())
}

fn write_output(path: Option<&Path>, content: &str) -> std::io::Result<()> {
    match path {
        Some(path) => fs::write(path, content),
        None => {
            println!("{content}");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use propeval::DocumentKind;
    use std::io::Write;

    #[test]
    fn test_load_document_roundtrip() {
        let doc = DocumentModel::from_texts(DocumentKind::Docx, &["Budget summary"]);
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(&doc).unwrap().as_bytes())
            .unwrap();

        let loaded = load_document(file.path()).unwrap();
        assert_eq!(loaded.paragraphs.len(), 1);
    }

    #[test]
    fn test_load_document_rejects_garbage() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();
        assert!(load_document(file.path()).is_err());
    }
}
