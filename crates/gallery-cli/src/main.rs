//! Gallery CLI: AI document tools behind one binary
//!
//! Each subcommand mirrors one page of the original tool gallery: parse a
//! document, analyze contract risks, transcribe a prescription, generate
//! a diagnosis, translate a notice, or spin a story. Extraction happens
//! locally; everything else is delegated to external collaborators.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use gallery_ai::prompts::{diagnosis_prompt, risk_analysis_prompt, DIAGNOSIS_DISCLAIMER, PRESCRIPTION_PROMPT};
use gallery_ai::{GeminiClient, MistralClient, TargetLanguage, TranslateClient};
use gallery_core::{Extraction, InputFormat};
use gallery_extract::{compose_docx, TextPipeline};
use std::path::{Path, PathBuf};

/// Characters of extracted text shown as a preview before analysis
const PREVIEW_CHARS: usize = 2000;

#[derive(Parser)]
#[command(name = "gallery", version, about = "AI document tool gallery")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract text from a PDF, DOCX, or image and print it
    Parse {
        /// Input file (.pdf, .docx, .png, .jpg, .jpeg)
        file: PathBuf,
    },

    /// Scan a contract and list risks, liabilities, and unfavorable terms
    Risk {
        /// Contract document (.pdf, .docx, .png, .jpg, .jpeg)
        file: PathBuf,
    },

    /// Transcribe a handwritten medical prescription image
    Prescription {
        /// Prescription image (.png, .jpg, .jpeg)
        image: PathBuf,
    },

    /// Generate a medical diagnosis from symptoms and an optional image
    Diagnose {
        /// Symptoms and medical history
        #[arg(long)]
        symptoms: String,

        /// Relevant medical image
        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Translate a notice into Hindi or Kannada
    Translate {
        /// Notice document (.pdf, .docx, .png, .jpg, .jpeg)
        file: PathBuf,

        /// Target language
        #[arg(long, value_name = "LANGUAGE")]
        to: TargetLanguage,

        /// Write the translation as a DOCX file
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },

    /// Generate a short story
    Story {
        /// Theme, setting, or character
        theme: Option<String>,
    },

    /// List supported upload formats
    Formats,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { file } => cmd_parse(&file),
        Commands::Risk { file } => cmd_risk(&file),
        Commands::Prescription { image } => cmd_prescription(&image),
        Commands::Diagnose { symptoms, image } => cmd_diagnose(&symptoms, image.as_deref()),
        Commands::Translate { file, to, out } => cmd_translate(&file, to, out.as_deref()),
        Commands::Story { theme } => cmd_story(theme.as_deref()),
        Commands::Formats => cmd_formats(),
    }
}

fn cmd_parse(file: &Path) -> Result<()> {
    let text = extract_or_warn(file)?;
    if let Some(text) = text {
        println!("{}", "Extracted Content:".bold());
        println!("{text}");
    }
    Ok(())
}

fn cmd_risk(file: &Path) -> Result<()> {
    let pipeline = TextPipeline::new();
    eprintln!("{}", "Extracting text...".dimmed());
    let extraction = pipeline
        .extract_file(file)
        .with_context(|| format!("failed to extract {}", file.display()))?;
    let Some(text) = extraction.into_text() else {
        bail!("no text could be extracted from the document");
    };

    println!("{}", "Extracted Text (preview):".bold());
    println!("{}", preview(&text, PREVIEW_CHARS));
    println!();

    let client = GeminiClient::from_env()?;
    eprintln!("{}", "Analyzing risks...".dimmed());
    let risks = client
        .generate(&risk_analysis_prompt(&text))
        .context("risk analysis failed")?;

    println!("{}", "Identified Risks:".bold());
    println!("{risks}");
    Ok(())
}

fn cmd_prescription(image: &Path) -> Result<()> {
    let format = InputFormat::from_filename(&image.to_string_lossy());
    if !format.is_some_and(|f| f.is_image()) {
        bail!("prescription input must be a PNG or JPEG image");
    }
    let data = std::fs::read(image)
        .with_context(|| format!("failed to read {}", image.display()))?;

    let client = GeminiClient::from_env()?;
    eprintln!("{}", "Processing prescription...".dimmed());
    let details = client
        .generate_with_image(PRESCRIPTION_PROMPT, &data, image_mime(image), Some(0.4))
        .context("prescription transcription failed")?;

    println!("{}", "Prescription Details:".bold());
    println!("{details}");
    Ok(())
}

fn cmd_diagnose(symptoms: &str, image: Option<&Path>) -> Result<()> {
    if symptoms.trim().is_empty() && image.is_none() {
        bail!("provide symptoms or a relevant medical image");
    }

    let prompt = diagnosis_prompt(symptoms, image.is_some());
    let client = GeminiClient::from_env()?;

    eprintln!("{}", "Generating diagnosis...".dimmed());
    let diagnosis = match image {
        Some(path) => {
            let data = std::fs::read(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            client.generate_with_image(&prompt, &data, image_mime(path), None)
        }
        None => client.generate(&prompt),
    }
    .context("diagnosis generation failed")?;

    println!("{}", "Diagnosis and Recommendations:".bold());
    println!("{diagnosis}");
    println!();
    println!("{}", DIAGNOSIS_DISCLAIMER.dimmed());
    Ok(())
}

fn cmd_translate(file: &Path, to: TargetLanguage, out: Option<&Path>) -> Result<()> {
    let Some(text) = extract_or_warn(file)? else {
        return Ok(());
    };

    println!("{}", "Original Text:".bold());
    println!("{text}");
    println!();

    let client = TranslateClient::from_env()?;
    eprintln!("{}", format!("Translating to {to}...").dimmed());
    let translated = client.translate(&text, to).context("translation failed")?;

    println!("{}", "Translated Text:".bold());
    println!("{translated}");

    if let Some(out) = out {
        let bytes = compose_docx(&translated)?;
        std::fs::write(out, bytes)
            .with_context(|| format!("failed to write {}", out.display()))?;
        println!();
        println!("{} {}", "Saved DOCX:".green(), out.display());
    }
    Ok(())
}

fn cmd_story(theme: Option<&str>) -> Result<()> {
    let client = MistralClient::from_env()?;
    eprintln!("{}", "Writing your story...".dimmed());
    let story = client.tell_story(theme).context("story generation failed")?;

    println!("{}", "Your Story:".bold());
    println!("{story}");
    Ok(())
}

fn cmd_formats() -> Result<()> {
    println!("{}", "Supported upload formats:".bold());
    for format in InputFormat::all() {
        println!("  {format:<6} .{}", format.extensions().join(", ."));
    }
    Ok(())
}

/// Run the pipeline on a file; print the standard warning and return
/// `None` when nothing could be extracted.
fn extract_or_warn(file: &Path) -> Result<Option<String>> {
    let pipeline = TextPipeline::new();
    eprintln!("{}", "Extracting text...".dimmed());
    let extraction = pipeline
        .extract_file(file)
        .with_context(|| format!("failed to extract {}", file.display()))?;

    match extraction {
        Extraction::Text(text) => Ok(Some(text)),
        Extraction::Empty => {
            println!(
                "{}",
                "No text could be extracted from the file. Please try with a clearer image or PDF."
                    .yellow()
            );
            Ok(None)
        }
    }
}

/// Truncate a preview at a character boundary, marking the cut.
fn preview(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let cut: String = text.chars().take(limit).collect();
    format!("{cut}...")
}

/// MIME type for an image upload, by extension.
fn image_mime(path: &Path) -> &'static str {
    match InputFormat::from_filename(&path.to_string_lossy()) {
        Some(InputFormat::Png) => "image/png",
        _ => "image/jpeg",
    }
}
