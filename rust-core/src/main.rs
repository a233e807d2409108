use std::process::ExitCode;

use clap::Parser;

use epicycle_dft::cli::Args;
use epicycle_dft::logger::init_logger;
use epicycle_dft::pipeline;

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(e) = init_logger() {
        eprintln!("Warning: logging disabled ({})", e);
    }

    match pipeline::run(&args.to_config()) {
        Ok(summary) => {
            println!(
                "DFT computed, sorted by amplitude and saved to {}",
                summary.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
