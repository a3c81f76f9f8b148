use clap::Parser;

mod app;
mod commands;
mod error;
mod output;

use commands::cli;

fn main() {
    let args = cli::Args::parse();

    match app::run_app(args) {
        Ok(line) => println!("{line}"),
        Err(e) => {
            let code = e.exit_code();
            eprintln!("{}", e.report());
            std::process::exit(code);
        }
    }
}
