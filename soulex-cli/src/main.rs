//! Soulex CLI - Command line interface
//!
//! Tokenizes a SOUL source file and prints the token stream.

use clap::Parser;
use std::path::{Path, PathBuf};
use std::process;

mod config;
mod logging;

use crate::config::{parse_log_level, LogConfig};
use crate::logging::{init as init_logging, LogFormat};
use soulex_api::{tokenize_with_config, LexerConfig, LineSession, RunConfig, TokenKind, TokenRecord};

/// 项目配置文件结构（soulex.json）
#[derive(Debug, Default, serde::Deserialize)]
struct ProjectConfig {
    /// 词法分析器配置
    lexer: Option<LexerConfig>,
    /// 日志级别: "silent", "error", "warn", "info", "debug", "trace"
    log_level: Option<String>,
}

#[derive(Parser)]
#[command(
    name = "soulex",
    about = "SOUL tokenizer - prints the classified token stream of a source file",
    version = "0.1.0"
)]
struct Cli {
    /// Source file to tokenize
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Print tokens as a JSON document
    #[arg(long)]
    json: bool,

    /// Scan line by line, printing the carried state after each line
    #[arg(long)]
    lines: bool,

    /// Suppress whitespace tokens
    #[arg(long)]
    no_whitespace: bool,

    /// Project configuration file path
    #[arg(long, value_name = "CONFIG", default_value = "soulex.json")]
    config: PathBuf,

    /// Log level override: silent, error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Log output format: pretty, compact, json
    #[arg(long, value_name = "FORMAT", default_value = "compact")]
    log_format: String,
}

fn main() {
    let cli = Cli::parse();

    // Read optional project config
    let project = match read_project_config(&cli.config) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // Log level: CLI flag overrides project config
    let level = cli
        .log_level
        .as_deref()
        .or(project.log_level.as_deref())
        .and_then(parse_log_level);
    let log_config = LogConfig {
        global: level.unwrap_or(LogConfig::default().global),
        ..LogConfig::default()
    };
    let format = match cli.log_format.as_str() {
        "pretty" => LogFormat::Pretty,
        "json" => LogFormat::Json,
        _ => LogFormat::Compact,
    };
    init_logging(&log_config, format);

    // Build run configuration
    let mut lexer_config = project.lexer.unwrap_or_default();
    if cli.no_whitespace {
        lexer_config.emit_whitespace = false;
    }
    let run_config = RunConfig {
        lexer: lexer_config,
    };
    soulex_api::init_config(run_config.clone());

    // Read source file
    let source = match std::fs::read_to_string(&cli.file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: Cannot read '{}': {}", cli.file.display(), e);
            process::exit(1);
        }
    };

    if cli.lines {
        run_line_mode(&source, &run_config, cli.json);
    } else {
        run_buffer_mode(&source, &run_config, cli.json);
    }
}

/// Read and parse the project config; a missing file means defaults
fn read_project_config(path: &Path) -> Result<ProjectConfig, String> {
    if !path.exists() {
        return Ok(ProjectConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Cannot read '{}': {}", path.display(), e))?;

    serde_json::from_str(&content)
        .map_err(|e| format!("Cannot parse '{}': {}", path.display(), e))
}

/// 整块扫描并打印
fn run_buffer_mode(source: &str, config: &RunConfig, json: bool) {
    let tokens = tokenize_with_config(source, config);
    let records: Vec<TokenRecord> = tokens
        .iter()
        .filter(|t| t.kind != TokenKind::EndOfInput)
        .map(TokenRecord::from)
        .collect();

    if json {
        print_json(&records);
    } else {
        for record in &records {
            print_record(record);
        }
    }
}

/// 按行扫描，展示携带状态
fn run_line_mode(source: &str, config: &RunConfig, json: bool) {
    let mut session = LineSession::with_config(config.lexer.clone());

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let scan = session.scan_line(line);
        if json {
            print_json(&scan);
        } else {
            println!("-- line {}", index + 1);
            for record in &scan.tokens {
                print_record(record);
            }
            println!("-- carried state: {}", session.state_json());
        }
    }
}

fn print_record(record: &TokenRecord) {
    println!(
        "{}:{}\t{:?}\t{:?}",
        record.line, record.column, record.kind, record.text
    );
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Error: Cannot serialize output: {}", e);
            process::exit(1);
        }
    }
}
