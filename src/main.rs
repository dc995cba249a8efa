use std::process::ExitCode;

use noisecipher::cli::{self, CliError};
use noisecipher::generator::Generator;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Get the command line arguments.
    let args = match cli::InputArguments::build() {
        Ok(args) => args,
        Err(CliError::Info(text)) => {
            println!("{text}");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("{e}");
            if !matches!(e, CliError::Usage(_)) {
                cli::usage();
            }
            return ExitCode::FAILURE;
        }
    };

    let mut generator = match Generator::build(args.out_dir, args.width, args.height) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match generator.run(&args.secret) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
