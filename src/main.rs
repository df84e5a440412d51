use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use dep_cleaner::{DependencyCleaner, PrefixCleaner};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "dep-cleaner")]
#[command(about = "Strip list bullets and whitespace from a dependency list", long_about = None)]
struct Cli {
    /// File with one dependency per line
    #[arg(requires = "output")]
    input: Option<PathBuf>,

    /// Where to save the cleaned list (overwritten)
    output: Option<PathBuf>,

    /// Config file (.json/.toml) or inline config with input_path and output_path
    #[arg(short, long, required_unless_present = "input")]
    config: Option<String>,

    /// Strip only this literal prefix instead of every leading '-' and ' '
    #[arg(long, allow_hyphen_values = true)]
    prefix: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    );
    if cli.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let mut builder = DependencyCleaner::new();
    if let Some(config) = &cli.config {
        builder = builder.with_config(config);
    }
    if let (Some(input), Some(output)) = (cli.input, cli.output) {
        builder = builder.with_paths(input, output);
    }
    if let Some(prefix) = cli.prefix {
        builder = builder.with_cleaner(PrefixCleaner::new(prefix));
    }

    match builder.build().run() {
        Ok(report) => {
            println!(
                "Dependencies cleaned and saved to {}",
                report.output_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!("{:?}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
