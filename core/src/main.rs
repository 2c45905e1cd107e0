use clap::Parser;
use dicurate_core::cli::Cli;
use dicurate_core::{pipeline, PipelineConfig, TextReport};
use log::info;
use std::process;

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = PipelineConfig {
        input: cli.input,
        organized_dir: cli.organized_dir,
        database: cli.database,
        collision: cli.collision.into(),
    };

    info!("Processing directory: {}", config.input.display());

    let outcome = match pipeline::run(&config) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    info!(
        "Pipeline complete: {} discovered, {} valid, {} extracted, {} organized",
        outcome.discovered, outcome.valid, outcome.extracted, outcome.organized
    );

    let report = TextReport::new(&outcome.summary, outcome.histogram.as_ref());
    println!("{}", report);
}

fn setup_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }
}
