use std::io::{self, BufRead, Write};

use miette::{NamedSource, Report};

use crate::scanner;
use crate::scanner::token::SpannedToken;

type Render = fn(&[SpannedToken]) -> String;

/// Tokenize stdin line by line until EOF, printing each line's tokens.
pub fn run_repl(render: Render) {
    show_prompt();
    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("read error: {e}");
                return;
            }
        };
        if !line.trim().is_empty() {
            match tokenize_line(&line, render) {
                Ok(output) => print!("{output}"),
                Err(report) => eprintln!("{report:?}"),
            }
        }
        show_prompt();
    }
}

fn show_prompt() {
    print!("> ");
    if let Err(e) = io::stdout().flush() {
        eprintln!("cannot flush stdout: {e}");
    }
}

/// Lex one input line; errors come back as a report over that line.
fn tokenize_line(line: &str, render: Render) -> Result<String, Report> {
    scanner::scan(line).map(|tokens| render(&tokens)).map_err(|err| {
        Report::new(err).with_source_code(NamedSource::new("<repl>", line.to_string()))
    })
}
