use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "page-scrape")]
#[command(about = "Fetch a web page and print its metadata, content and navigation as JSON")]
#[command(version)]
pub struct Args {
    /// URL to scrape, used when standard input is empty (extra arguments are ignored)
    #[arg(trailing_var_arg = true)]
    pub urls: Vec<String>,

    /// JSON file with scraper settings (timeout, user agent, limits)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// First positional argument
    pub fn url(&self) -> Option<&str> {
        self.urls.first().map(String::as_str)
    }
}
