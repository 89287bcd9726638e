use std::process;

use clap::Parser;
use codonust::{cli::Args, run};
use colored::Colorize;

fn main() {
    let args = Args::parse();

    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if !args.quiet {
        eprintln!(
            "{}: {}",
            "data".bold(),
            args.path.display().to_string().underline().bold().blue()
        );
        eprintln!(
            "{}: {}",
            "unknown codons".bold(),
            args.unknown.to_string().blue().bold()
        );
        eprintln!();
    }

    if let Err(e) = run::run(&args.path, args.unknown) {
        eprintln!(
            "{}\n {}",
            "Application error:".blue().bold(),
            e.to_string().blue()
        );
        process::exit(1);
    }
}
