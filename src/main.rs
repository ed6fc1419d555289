use clap::Parser;
use ipv4_calculator::config::{Config, OutputFormat};
use ipv4_calculator::output::{print_report, report_json};
use ipv4_calculator::validate::{validation_state, ValidationState};
use ipv4_calculator::{analyze_all, analyze_all_with_mask, failures_to_error};
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

#[derive(Parser, Debug)]
#[command(version, about = "IPv4 address/prefix calculator")]
struct Args {
    /// Addresses in A.B.C.D/P form (plain A.B.C.D with --mask)
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Print reports as JSON
    #[arg(long)]
    json: bool,

    /// Dotted subnet mask to use instead of a /P suffix
    #[arg(long)]
    mask: Option<String>,

    /// Only validate the inputs
    #[arg(long)]
    check: bool,
}

fn init_logging(config: &Config) -> Result<(), Box<dyn Error>> {
    if Path::new(&config.log_config).exists() {
        log4rs::init_file(&config.log_config, Default::default())?;
        return Ok(());
    }
    let stderr = ConsoleAppender::builder()
        .target(log4rs::append::console::Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d} {h({l})} {t} - {m}{n}")))
        .build();
    let log_config = log4rs::config::Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(log::LevelFilter::Warn))?;
    log4rs::init_config(log_config)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logging(&config)?;
    log::info!("#Start main()");
    for warning in &config.warnings {
        log::warn!("{warning}");
    }

    let args = Args::parse();
    let output = if args.json {
        OutputFormat::Json
    } else {
        config.output
    };

    if args.check {
        let mut all_valid = true;
        for input in &args.inputs {
            let state = validation_state(input);
            all_valid &= state == ValidationState::Valid;
            println!("{input}: {state:?}");
        }
        return if all_valid {
            Ok(())
        } else {
            Err("invalid input".into())
        };
    }

    let inputs = args.inputs.iter().map(|s| s.as_str());
    let (reports, failures) = match &args.mask {
        Some(mask) => analyze_all_with_mask(inputs, mask),
        None => analyze_all(inputs),
    };

    match output {
        OutputFormat::Json => println!("{}", report_json(&reports)?),
        OutputFormat::Table => {
            for report in &reports {
                print_report(report);
                println!();
            }
        }
    }

    failures_to_error(&failures)
}
