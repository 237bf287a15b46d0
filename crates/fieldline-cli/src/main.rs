//! Fieldline CLI - inspect how text is tokenized, matched and completed

use std::path::{Path, PathBuf};
use std::process;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fieldline_ast::Statement;
use fieldline_engine::{defaults::default_config, run, ParseResult, SuggestionRequest};
use fieldline_parser::{load_config, StatementConfig};

const SOURCE_ID: &str = "<input>";

#[derive(Parser)]
#[command(name = "fieldline")]
#[command(about = "Statement tokenizer, matcher and field predictor", long_about = None)]
struct Cli {
    /// Grammar file (JSON). The built-in `identifier comparison value`
    /// grammar is used when omitted
    #[arg(short, long, global = true)]
    grammar: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the pipeline and print the result as JSON
    Parse {
        /// Input text
        text: String,
        /// Caret byte offset (defaults to the end of the text)
        #[arg(short, long)]
        caret: Option<usize>,
        /// Pretty print the output
        #[arg(short, long)]
        pretty: bool,
    },
    /// Report mismatched and incomplete statements
    Check {
        /// Input text
        text: String,
    },
    /// Show suggestions for the field under the caret
    Suggest {
        /// Input text
        text: String,
        /// Caret byte offset (defaults to the end of the text)
        #[arg(short, long)]
        caret: Option<usize>,
        /// Zero-based page
        #[arg(long, default_value_t = 0)]
        page: usize,
        /// Suggestions per page (0 for all)
        #[arg(long, default_value_t = 20)]
        page_size: usize,
    },
    /// Interactive REPL
    Repl,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let mut config = load_or_exit(cli.grammar.as_deref());

    match cli.command {
        Commands::Parse {
            text,
            caret,
            pretty,
        } => cmd_parse(&text, caret, pretty, &config),
        Commands::Check { text } => cmd_check(&text, &config),
        Commands::Suggest {
            text,
            caret,
            page,
            page_size,
        } => cmd_suggest(&text, caret, page, page_size, &config),
        Commands::Repl => cmd_repl(&mut config),
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fieldline=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load(grammar: Option<&Path>) -> Result<StatementConfig, fieldline_parser::ConfigError> {
    match grammar {
        Some(path) => load_config(path),
        None => default_config(),
    }
}

fn load_or_exit(grammar: Option<&Path>) -> StatementConfig {
    match load(grammar) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading grammar: {}", e);
            process::exit(2);
        }
    }
}

fn cmd_parse(text: &str, caret: Option<usize>, pretty: bool, config: &StatementConfig) {
    let result = run(text, caret.unwrap_or(text.len()), config);
    let json = if pretty {
        serde_json::to_string_pretty(&result)
    } else {
        serde_json::to_string(&result)
    };
    match json {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing result: {}", e);
            process::exit(1);
        }
    }
}

fn cmd_check(text: &str, config: &StatementConfig) {
    let result = run(text, text.len(), config);

    for statement in &result.statements {
        report_statement(text, statement, config);
    }

    let errors = result.statements.iter().filter(|s| s.has_error()).count();
    if errors > 0 {
        eprintln!(
            "✗ {} of {} statements have errors",
            errors,
            result.statements.len()
        );
        process::exit(1);
    }
    println!("✓ {} statements", result.statements.len());
}

fn cmd_suggest(
    text: &str,
    caret: Option<usize>,
    page: usize,
    page_size: usize,
    config: &StatementConfig,
) {
    let result = run(text, caret.unwrap_or(text.len()), config);
    let Some(request) = SuggestionRequest::for_result(&result, config) else {
        println!("Statement complete, nothing to suggest");
        return;
    };

    let runtime = match tokio::runtime::Builder::new_current_thread().build() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error starting runtime: {}", e);
            process::exit(1);
        }
    };

    println!(
        "{} (query {:?}, replaces {}..{})",
        request.rule.name, request.query, request.replace.start, request.replace.end
    );
    match runtime.block_on(request.fetch(page, page_size)) {
        Ok(values) if values.is_empty() => println!("  no suggestions"),
        Ok(values) => {
            for value in values {
                println!("  {}", value);
            }
        }
        Err(e) => {
            tracing::warn!(rule = %request.rule.name, "lookup failed: {}", e);
            process::exit(1);
        }
    }
}

fn cmd_repl(config: &mut StatementConfig) {
    use rustyline::DefaultEditor;

    println!("Fieldline REPL v0.1.0");
    println!("Type :help for help, :quit to exit");
    println!();

    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("Error starting REPL: {}", e);
            process::exit(1);
        }
    };

    while let Ok(line) = rl.readline("fieldline> ") {
        let _ = rl.add_history_entry(&line);
        let trimmed = line.trim();

        match trimmed {
            ":quit" | ":q" => break,
            ":help" | ":h" => {
                println!("Commands:");
                println!("  :grammar <file>  - Load a grammar file");
                println!("  :format          - Show the statement format");
                println!("  :quit            - Exit REPL");
                println!("Any other line is parsed with the caret at its end.");
            }
            ":format" => println!("{}", config.format().join(" ")),
            cmd if cmd.starts_with(":grammar ") => {
                let path = cmd[":grammar ".len()..].trim();
                match load_config(path) {
                    Ok(loaded) => {
                        *config = loaded;
                        println!("Loaded {}", path);
                    }
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            cmd if cmd.starts_with(':') => println!("Unknown command. Type :help for help."),
            _ => print_summary(&run(&line, line.len(), config)),
        }
    }

    println!("Goodbye!");
}

fn print_summary(result: &ParseResult) {
    for (index, statement) in result.statements.iter().enumerate() {
        let state = match (statement.has_error(), statement.incomplete) {
            (true, _) => "error",
            (false, true) => "incomplete",
            (false, false) => "complete",
        };
        println!("statement {} ({})", index, state);
        for token in statement.tokens.iter().filter(|t| !t.is_whitespace()) {
            let marker = if token.invalid { "✗" } else { " " };
            println!("  {} {:<12} {:?}", marker, token.kind, token.text);
        }
        if let Some(error) = &statement.error {
            println!("    {}", error);
        }
    }
    match &result.prediction {
        Some(predicted) => match predicted.description() {
            Some(description) => println!("next: {} - {}", predicted.kind, description),
            None => println!("next: {}", predicted.kind),
        },
        None => println!("next: (statement complete)"),
    }
}

/// Token spans are byte offsets; ariadne counts chars unless told otherwise
fn byte_offsets() -> Config {
    Config::default().with_index_type(IndexType::Byte)
}

fn report_statement(text: &str, statement: &Statement, config: &StatementConfig) {
    let Some(span) = statement.span() else {
        return;
    };

    let report = if let Some(error) = &statement.error {
        Report::build(ReportKind::Error, SOURCE_ID, error.span.start)
            .with_config(byte_offsets())
            .with_message(error.to_string())
            .with_label(
                Label::new((SOURCE_ID, error.span.range()))
                    .with_message(format!("this is {}", error.found))
                    .with_color(Color::Red),
            )
    } else if statement.incomplete {
        let missing = config
            .expected_at(statement.real_len())
            .unwrap_or_default();
        Report::build(ReportKind::Warning, SOURCE_ID, span.start)
            .with_config(byte_offsets())
            .with_message("incomplete statement")
            .with_label(
                Label::new((SOURCE_ID, span.range()))
                    .with_message(format!("expected {} next", missing))
                    .with_color(Color::Yellow),
            )
    } else {
        return;
    };

    if let Err(e) = report.finish().eprint((SOURCE_ID, Source::from(text))) {
        tracing::warn!("failed to print report: {}", e);
    }
}
