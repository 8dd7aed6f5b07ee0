use std::{io, path::PathBuf, process, time::Instant};

use clap::Parser;
use erys::{
    config::{LexerConfig, MalformedNumber, QuoteSpan},
    lexer::{lexer::Lexer, stream::TokenStream},
    render_error,
    session::Session,
};
use tracing::{info, Level};

/// Proto compiler for the Erys language
#[derive(Debug, Parser)]
#[command(name = "erysc", version)]
struct Cli {
    /// Input file to compile
    input: Option<PathBuf>,

    /// Disable colored diagnostics
    #[arg(long)]
    no_color: bool,

    /// Emit malformed numbers as `Unknown` tokens instead of stopping
    #[arg(long)]
    error_tokens: bool,

    /// Include the quotes in quoted literal spans
    #[arg(long)]
    delimited_quotes: bool,

    /// Lex `//` and `/*` as slashes rather than comments
    #[arg(long)]
    no_comments: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn lexer_config(&self) -> LexerConfig {
        let mut config = LexerConfig::default().with_comments(!self.no_comments);

        if self.error_tokens {
            config = config.with_malformed_number(MalformedNumber::ErrorToken);
        }
        if self.delimited_quotes {
            config = config.with_quote_span(QuoteSpan::Delimited);
        }

        config
    }

    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(io::stderr)
        .init();

    let Some(input) = cli.input.as_ref() else {
        println!("error: No input file");
        process::exit(1);
    };

    let mut session = match Session::load(input) {
        Ok(session) => session,
        Err(error) => {
            println!("error: {}", error);
            process::exit(1);
        }
    };
    session.set_use_color(!cli.no_color);

    let start = Instant::now();
    let stream = TokenStream::new(Lexer::with_config(
        session.source.clone(),
        cli.lexer_config(),
    ));

    info!(
        target: "erys::cli",
        tokens = stream.len(),
        elapsed = ?start.elapsed(),
        "Tokenized"
    );

    for token in stream.tokens() {
        println!("{}", token);
    }

    if !stream.errors().is_empty() {
        for error in stream.errors() {
            print!("{}", render_error(error, &session));
        }
        process::exit(1);
    }
}
