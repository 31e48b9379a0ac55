//! Ecdotica CLI
//!
//! Usage:
//!   ecdotica --text "your manuscript"        # Analyze inline text
//!   ecdotica --file novela.txt               # Analyze a file
//!   ecdotica < novela.txt                    # Analyze stdin
//!   ecdotica --file novela.txt --json        # JSON output
//!   ecdotica --serve --addr 0.0.0.0:8000     # HTTP API server

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use ecdotica::config::AppConfig;
use ecdotica::core::{policy, run_server, ExtractorRegistry, TextQualityAnalyzer};
use ecdotica::types::{Evaluation, Inspection};
use ecdotica::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "ecdotica",
    version = VERSION,
    about = "Ecdotica - manuscript text-quality analysis",
    long_about = "Ecdotica computes readability and quality statistics for manuscripts:\n\
                  word, sentence and paragraph counts, complex-word ratio, repeated\n\
                  words, detected issues and a 0-100 quality score.\n\n\
                  Modes:\n  \
                  --text / --file / stdin  Analyze and print a report\n  \
                  --serve                  HTTP API server"
)]
struct Args {
    /// Text to analyze
    #[arg(short, long, conflicts_with = "file")]
    text: Option<String>,

    /// File to analyze (.txt, .md)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Run as HTTP API server
    #[arg(
        short,
        long,
        conflicts_with_all = ["text", "file", "json", "no_color", "verbose"]
    )]
    serve: bool,

    /// Server address (overrides config)
    #[arg(long)]
    addr: Option<String>,

    /// Config file (default: ./ecdotica.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Length a word must exceed to count as complex (overrides config)
    #[arg(long)]
    complex_threshold: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show repeated words and style statistics
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(if args.serve { "info" } else { "warn" });

    let config = load_config(&args)?;

    if args.serve {
        run_server(config).await.context("API server failed")?;
        return Ok(());
    }

    let text = read_input(&args, &config)?;
    let analyzer = TextQualityAnalyzer::with_config(config.analyzer);
    let inspection = analyzer.inspect(&text);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&inspection.report)?);
    } else if args.no_color {
        print_plain(&inspection, args.verbose);
    } else {
        print_colored(&inspection, args.verbose);
    }
    Ok(())
}

/// `RUST_LOG` wins; otherwise `default_level` for this crate and tower-http
fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("ecdotica={0},tower_http={0}", default_level))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Config file + env, then CLI flags on top
fn load_config(args: &Args) -> Result<AppConfig> {
    let work_dir = std::env::current_dir().context("Cannot determine working directory")?;
    let mut config = AppConfig::load(&work_dir, args.config.as_deref())?;

    if let Some(addr) = &args.addr {
        config.server.addr = addr.clone();
    }
    if let Some(threshold) = args.complex_threshold {
        config.analyzer.complex_word_threshold = threshold;
    }
    Ok(config)
}

/// --text, --file, or stdin to EOF
fn read_input(args: &Args, config: &AppConfig) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.file {
        let registry = ExtractorRegistry::with_defaults(config.limits.max_upload_bytes);
        let (_, text) = registry
            .extract_path(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        return Ok(text);
    }

    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read stdin")?;
    Ok(text)
}

fn print_plain(inspection: &Inspection, verbose: bool) {
    let report = &inspection.report;
    let (status, _) = policy::route(report);
    println!("{} | status={}", report.to_parseable_string(), status);
    for issue in &report.issues {
        println!("issue: {}", issue);
    }
    if verbose {
        for (word, count) in &report.repeated_words {
            println!("repeated: {}={}", word, count);
        }
        let style = &inspection.style;
        println!(
            "style: ttr={:.3} | flesch={:.1} | level={:?} | dialogue={:.3} | mente={:.3} | deviation={:.2}",
            style.type_token_ratio,
            style.flesch_szigriszt,
            style.reading_level,
            style.dialogue_ratio,
            style.mente_adverb_ratio,
            style.sentence_length_deviation
        );
    }
}

fn print_colored(inspection: &Inspection, verbose: bool) {
    let report = &inspection.report;
    let (status, recommendation) = policy::route(report);
    let score = format!("{}/100", report.quality_score);
    let score = match policy::evaluate(report.quality_score) {
        Evaluation::Excellent => score.as_str().green().bold(),
        Evaluation::Good => score.as_str().yellow().bold(),
        Evaluation::NeedsWork => score.as_str().red().bold(),
    };

    println!("{} {}", "Quality score:".bold(), score);
    println!(
        "  words={}  sentences={}  paragraphs={}",
        report.word_count, report.sentence_count, report.paragraph_count
    );
    println!(
        "  avg words/sentence={:.2}  complex ratio={:.3}  reading time={:.1} min",
        report.avg_words_per_sentence,
        report.complex_word_ratio,
        report.estimated_reading_time_minutes
    );

    if report.issues.is_empty() {
        println!("{}", "  ✓ No issues detected".green());
    } else {
        println!("{}", "Issues:".bold());
        for issue in &report.issues {
            println!("  {} {}", "⚠".yellow(), issue);
        }
    }

    if verbose && !report.repeated_words.is_empty() {
        println!("{}", "Repeated words:".bold());
        for (word, count) in &report.repeated_words {
            println!("  {} ×{}", word, count);
        }
    }

    if verbose {
        let style = &inspection.style;
        println!("{}", "Style:".bold());
        println!(
            "  readability={:.1} ({})  vocabulary={:.3}  sentence deviation={:.2}",
            style.flesch_szigriszt,
            style.reading_level,
            style.type_token_ratio,
            style.sentence_length_deviation
        );
        println!(
            "  dialogue={:.1}%  -mente adverbs={:.1}%  connectives={}",
            style.dialogue_ratio * 100.0,
            style.mente_adverb_ratio * 100.0,
            style.connectives_found
        );
        let top: Vec<String> = style
            .top_words
            .iter()
            .map(|w| format!("{} ×{}", w.word, w.count))
            .collect();
        if !top.is_empty() {
            println!("  top words: {}", top.join(", ").as_str().dimmed());
        }
    }

    println!(
        "{} {}",
        "Status:".bold(),
        status.to_string().as_str().color(status.color_name())
    );
    println!("  {}", recommendation.dimmed());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_rejects_analysis_flags() {
        let cases: [&[&str]; 4] = [
            &["--text", "hola"],
            &["--file", "a.txt"],
            &["--json"],
            &["--verbose"],
        ];
        for flag in cases {
            let mut argv = vec!["ecdotica", "--serve"];
            argv.extend_from_slice(flag);
            let err = Args::try_parse_from(argv).unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict, "{:?}", flag);
        }
    }

    #[test]
    fn test_serve_accepts_server_flags() {
        let args = Args::try_parse_from([
            "ecdotica",
            "--serve",
            "--addr",
            "0.0.0.0:9000",
            "--complex-threshold",
            "8",
        ])
        .unwrap();
        assert!(args.serve);
        assert_eq!(args.addr.as_deref(), Some("0.0.0.0:9000"));
        assert_eq!(args.complex_threshold, Some(8));
    }

    #[test]
    fn test_text_and_file_conflict() {
        let err =
            Args::try_parse_from(["ecdotica", "--text", "hola", "--file", "a.txt"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }
}
