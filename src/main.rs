use clap::Parser;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use sg_ips_summary::config::Args;
use sg_ips_summary::errors::SgIpsError;
use sg_ips_summary::geoip::install_instructions;
use std::process::ExitCode;

const LOG_CONFIG: &str = "log4rs.yml";

/// Use log4rs.yml when present, else warnings and up on stdout.
fn init_logging() {
    if log4rs::init_file(LOG_CONFIG, Default::default()).is_ok() {
        return;
    }
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{l}: {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Warn));
    match config {
        Ok(config) => {
            if let Err(e) = log4rs::init_config(config) {
                eprintln!("Error initializing logging: {e}");
            }
        }
        Err(e) => eprintln!("Error building logging config: {e}"),
    }
}

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    init_logging();
    dotenv::dotenv().ok();
    let args = Args::parse();
    log::info!("#Start main() {args:?}");

    match sg_ips_summary::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("ERROR: {e}");
            if let SgIpsError::LookupUnavailable { .. } = e {
                eprintln!("{}", install_instructions(&args.geoip_dir));
            }
            ExitCode::FAILURE
        }
    }
}
