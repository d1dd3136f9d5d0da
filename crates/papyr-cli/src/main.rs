//! Papyr command-line entry point.

mod app;
mod cli;
mod config;
mod render;

use clap::Parser;

use crate::app::PapyrApp;
use crate::cli::CliArgs;

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    let app = match PapyrApp::from_args(&args) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = app.run(args).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
