use clap::Parser;
use clap::error::ErrorKind;
use page_scrape::{PageExtractor, ScrapeError, ScrapeResult, input};
use std::io::{self, IsTerminal, Read};

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Logs go to stderr, stdout carries only the JSON result
    env_logger::init();

    let result = match read_stdin() {
        Ok(stdin) => respond(std::env::args().collect(), &stdin).await,
        Err(e) => ScrapeResult::bare_failure(e),
    };

    match serde_json::to_string_pretty(&result) {
        Ok(json) => println!("{}", json),
        Err(e) => ::log::error!("Failed to serialize result: {}", e),
    }
}

/// Result to print for one invocation, failures included
async fn respond(argv: Vec<String>, stdin: &str) -> ScrapeResult {
    match run(argv, stdin).await {
        Ok(result) => result,
        Err(e) => {
            ::log::error!("Scrape failed before a URL was resolved: {}", e);
            ScrapeResult::bare_failure(e)
        }
    }
}

async fn run(argv: Vec<String>, stdin: &str) -> Result<ScrapeResult, ScrapeError> {
    let args = parse_args(argv);

    let extractor = match &args.config {
        Some(path) => PageExtractor::new().with_config_file(path)?,
        None => PageExtractor::new(),
    };

    let url = input::resolve_url(stdin, args.url())?;

    Ok(extractor.scrape(&url).await)
}

/// Parse the command line, never failing on arguments it does not know
///
/// Anything clap rejects falls back to taking the first argument as the URL
/// with the default configuration.
fn parse_args(argv: Vec<String>) -> Args {
    match Args::try_parse_from(&argv) {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            ::log::warn!("Ignoring unrecognized command line: {:?}", e.kind());
            Args {
                urls: argv.into_iter().skip(1).take(1).collect(),
                config: None,
            }
        }
    }
}

/// Whole standard input, or nothing when it is an interactive terminal
fn read_stdin() -> Result<String, ScrapeError> {
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(String::new());
    }

    let mut buffer = String::new();
    stdin.read_to_string(&mut buffer)?;
    Ok(buffer)
}
