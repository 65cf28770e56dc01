use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use miette::{NamedSource, Report};
use tracing_subscriber::EnvFilter;

use waffle::printer;
use waffle::repl;
use waffle::scanner::lexer::Lexer;
use waffle::scanner::token::SpannedToken;
use waffle::source;

#[derive(Parser, Debug)]
#[command(name = "waffle", about = "Tokenize waffle source and print the tokens")]
struct Cli {
    /// Source file to tokenize (omit for REPL)
    file: Option<PathBuf>,

    /// Tokenize this text instead of a file
    #[arg(short, long, conflicts_with = "file")]
    expr: Option<String>,

    /// Token output format
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    format: String,

    /// Log more (-v debug, -vv trace); overrides RUST_LOG
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("waffle=debug"),
        _ => EnvFilter::new("waffle=trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn renderer(format: &str) -> fn(&[SpannedToken]) -> String {
    match format {
        "json" => printer::to_json,
        _ => printer::to_text,
    }
}

fn tokenize_and_print(
    name: &str,
    code: &[char],
    render: fn(&[SpannedToken]) -> String,
) -> Result<()> {
    match Lexer::new(code).tokenize() {
        Ok(tokens) => {
            print!("{}", render(&tokens));
            Ok(())
        }
        Err(err) => {
            let text: String = code.iter().collect();
            let report = Report::new(err).with_source_code(NamedSource::new(name, text));
            eprintln!("{report:?}");
            bail!("could not tokenize {name}")
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let render = renderer(&cli.format);

    if let Some(ref expr) = cli.expr {
        let code: Vec<char> = expr.chars().collect();
        return tokenize_and_print("<expr>", &code, render);
    }

    match cli.file {
        Some(ref path) => {
            let code = source::read_file(path)
                .with_context(|| format!("load source file '{}'", path.display()))?;
            tokenize_and_print(&path.display().to_string(), &code, render)
        }
        None => {
            repl::run_repl(render);
            Ok(())
        }
    }
}
