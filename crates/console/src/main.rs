use std::io;

use ordermatch_console::error::Result;
use ordermatch_console::{Console, ConsoleConfig};
use ordermatch_matching::{OrderMatcher, create_matching_engine};

fn print_help() {
    eprintln!(
        r#"ordermatch - interactive limit order matcher

USAGE:
    ordermatch [OPTIONS]

OPTIONS:
    --config <PATH>     Load configuration from JSON file
    --help              Print this help message

ENVIRONMENT VARIABLES:
    ORDERMATCH_ENGINE   Matching engine: price-time (default) or linear
    RUST_LOG            Log level filter (default: warn)

EXAMPLES:
    # Run with defaults
    ordermatch

    # Run with seed orders from a config file
    ordermatch --config book.json
"#
    );
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
                config_path = Some(args[i].clone());
            }
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let config = match config_path {
        Some(path) => {
            log::info!("Loading configuration from: {}", path);
            ConsoleConfig::from_file(&path)?
        }
        None => ConsoleConfig::default(),
    }
    .with_env_overrides();

    let engine = create_matching_engine(&config.engine);
    log::info!("Matching engine: {}", engine.name());

    let mut console = Console::new(engine).with_json_trades(config.echo_trades_as_json);
    console.seed(config.seed_orders()?)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    console.run(stdin.lock(), &mut stdout, &mut stderr)?;

    Ok(())
}
