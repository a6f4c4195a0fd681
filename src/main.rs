use mimegen::cli::Cli;
use mimegen::logging;

fn main() {
    // Initialize logging as early as possible.
    logging::init_logging();

    // Parse CLI and run the generator.
    if let Err(err) = Cli::run_from_args() {
        eprintln!("mimegen error: {:#}", err);
        std::process::exit(1);
    }
}
