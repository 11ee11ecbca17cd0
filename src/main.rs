// Tue Jan 13 2026 - Alex

use clap::Parser;
use colored::Colorize;
use typelayout::ui::{Args, CommandHandler};

fn main() {
    let args = Args::parse();

    if let Err(e) = CommandHandler::new().execute(args) {
        eprintln!("{} {:#}", "[!]".red(), e);
        std::process::exit(1);
    }
}
