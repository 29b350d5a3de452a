//! Lexiscan CLI - Command-line interface for the screening engine
//!
//! Commands:
//! - behavioral: Build a behavioral screening report from session metrics
//! - quiz: Score a parent questionnaire against a definition document
//! - schema: Print schema information for inputs and outputs

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use lexiscan::encoder::ReportEncoder;
use lexiscan::quiz::{quiz_report, ChildInfo, QuizDefinition, QuizResponses};
use lexiscan::types::BehavioralMetrics;
use lexiscan::{behavioral_report, ScreeningError, ENGINE_VERSION};

/// Lexiscan - Scoring engine for behavioral dyslexia screening
#[derive(Parser)]
#[command(name = "lexiscan")]
#[command(version = ENGINE_VERSION)]
#[command(about = "Score screening metrics into risk reports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a behavioral screening report from session metrics
    Behavioral {
        /// Metrics JSON file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path (use - for stdout)
        #[arg(short, long, default_value = "-")]
        output: PathBuf,

        /// Output format (defaults to pretty JSON on a TTY)
        #[arg(long)]
        format: Option<OutputFormat>,
    },

    /// Score a parent questionnaire
    Quiz {
        /// Question definition document path
        #[arg(short, long)]
        questions: PathBuf,

        /// Responses JSON file path (use - for stdin)
        #[arg(short, long)]
        responses: PathBuf,

        /// Child name carried through to the report
        #[arg(long)]
        child_name: String,

        /// Child age carried through to the report
        #[arg(long)]
        child_age: u32,

        /// Output file path (use - for stdout)
        #[arg(short, long, default_value = "-")]
        output: PathBuf,

        /// Output format (defaults to pretty JSON on a TTY)
        #[arg(long)]
        format: Option<OutputFormat>,
    },

    /// Print schema information
    Schema {
        /// Schema to print
        #[arg(value_enum)]
        schema_type: SchemaType,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Compact JSON
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

#[derive(Clone, Copy, ValueEnum)]
enum SchemaType {
    /// Input metric and response schemas
    Input,
    /// Output report payload schema
    Output,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), LexiscanCliError> {
    match cli.command {
        Commands::Behavioral {
            input,
            output,
            format,
        } => cmd_behavioral(&input, &output, format),

        Commands::Quiz {
            questions,
            responses,
            child_name,
            child_age,
            output,
            format,
        } => cmd_quiz(&questions, &responses, child_name, child_age, &output, format),

        Commands::Schema { schema_type } => cmd_schema(schema_type),
    }
}

fn cmd_behavioral(
    input: &Path,
    output: &Path,
    format: Option<OutputFormat>,
) -> Result<(), LexiscanCliError> {
    let raw = read_input(input)?;

    let metrics: BehavioralMetrics = serde_json::from_str(&raw)
        .map_err(|e| LexiscanCliError::ParseError(format!("Failed to parse metrics: {e}")))?;

    let report = behavioral_report(&metrics);
    let payload = ReportEncoder::new().encode(&report);
    let rendered = render(&payload, format)?;

    write_output(output, &rendered)
}

fn cmd_quiz(
    questions: &Path,
    responses: &Path,
    child_name: String,
    child_age: u32,
    output: &Path,
    format: Option<OutputFormat>,
) -> Result<(), LexiscanCliError> {
    let definition_raw = fs::read_to_string(questions)?;
    let definition = QuizDefinition::from_json(&definition_raw)?;

    let responses_raw = read_input(responses)?;
    let responses: QuizResponses = serde_json::from_str(&responses_raw)
        .map_err(|e| LexiscanCliError::ParseError(format!("Failed to parse responses: {e}")))?;

    let child = ChildInfo {
        name: child_name,
        age: child_age,
    };

    let report = quiz_report(&definition, child, &responses);
    let payload = ReportEncoder::new().encode(&report);
    let rendered = render(&payload, format)?;

    write_output(output, &rendered)
}

fn cmd_schema(schema_type: SchemaType) -> Result<(), LexiscanCliError> {
    match schema_type {
        SchemaType::Input => {
            println!("Behavioral input: BehavioralMetrics");
            println!();
            println!("  facial (optional):");
            println!("    expressions     - label -> percentage (neutral, confused,");
            println!("                      concentrated, frustrated, happy; sums to ~100)");
            println!("    dominant_expression, confidence_score, total_frames");
            println!();
            println!("  audio (optional):");
            println!("    reading_speed (wpm), speed_assessment, hesitations,");
            println!("    hesitations_per_minute, pronunciation_errors,");
            println!("    speech_clarity_percentage, fluency_score,");
            println!("    reading_rhythm_score, overall_audio_score");
            println!();
            println!("  eye (optional):");
            println!("    fixations/regressions/saccades counts and percentages,");
            println!("    eye_stability_percentage, saccade_efficiency_percentage,");
            println!("    reading_efficiency_score");
            println!();
            println!("Quiz input: definition document + response map");
            println!();
            println!("  definition: {{\"questions\": [{{\"id\", \"category\"}}],");
            println!("               \"categories\": {{id: display_name}}}}");
            println!("  responses:  {{question_id: integer 0-100}}");
        }
        SchemaType::Output => {
            println!("Output: ScreeningPayload");
            println!();
            println!("- report_version: Schema version (1.0.0)");
            println!("- producer: {{ name, version, instance_id }}");
            println!("- generated_at_utc: RFC 3339 timestamp");
            println!("- report: one of");
            println!();
            println!("  BehavioralReport:");
            println!("    indicators               - triggered descriptions, rule order");
            println!("    indicator_scores         - indicator id -> contribution");
            println!("    dyslexia_likelihood_percentage (0-100)");
            println!("    risk_level               - Low | Moderate | High");
            println!("    confidence_percentage");
            println!("    reading_profile          - {{ strengths, challenges }}");
            println!();
            println!("  QuizReport:");
            println!("    overall_score, category_scores, recommendations,");
            println!("    severity_level (5 tiers), child_info");
        }
    }

    Ok(())
}

// Helper functions

fn read_input(path: &Path) -> Result<String, LexiscanCliError> {
    if path.to_string_lossy() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

fn write_output(path: &Path, data: &str) -> Result<(), LexiscanCliError> {
    if path.to_string_lossy() == "-" {
        println!("{data}");
        Ok(())
    } else {
        fs::write(path, data)?;
        Ok(())
    }
}

fn render<T: serde::Serialize>(
    payload: &T,
    format: Option<OutputFormat>,
) -> Result<String, LexiscanCliError> {
    let format = format.unwrap_or_else(|| {
        if atty::is(atty::Stream::Stdout) {
            OutputFormat::JsonPretty
        } else {
            OutputFormat::Json
        }
    });

    let rendered = match format {
        OutputFormat::Json => serde_json::to_string(payload)?,
        OutputFormat::JsonPretty => serde_json::to_string_pretty(payload)?,
    };
    Ok(rendered)
}

// Error types

#[derive(Debug)]
enum LexiscanCliError {
    Io(io::Error),
    Engine(ScreeningError),
    Json(serde_json::Error),
    ParseError(String),
}

impl From<io::Error> for LexiscanCliError {
    fn from(e: io::Error) -> Self {
        LexiscanCliError::Io(e)
    }
}

impl From<ScreeningError> for LexiscanCliError {
    fn from(e: ScreeningError) -> Self {
        LexiscanCliError::Engine(e)
    }
}

impl From<serde_json::Error> for LexiscanCliError {
    fn from(e: serde_json::Error) -> Self {
        LexiscanCliError::Json(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<LexiscanCliError> for CliError {
    fn from(e: LexiscanCliError) -> Self {
        match e {
            LexiscanCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            LexiscanCliError::Engine(e) => CliError {
                code: "ENGINE_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Run 'lexiscan schema input' for the expected shapes".to_string()),
            },
            LexiscanCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check JSON syntax".to_string()),
            },
            LexiscanCliError::ParseError(msg) => CliError {
                code: "PARSE_ERROR".to_string(),
                message: msg,
                hint: Some("Run 'lexiscan schema input' for the expected shapes".to_string()),
            },
        }
    }
}
