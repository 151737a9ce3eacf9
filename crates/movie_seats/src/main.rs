use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, error, info};
use movie_seats::{Config, SeatAllocator, SeatingEngine, read_requests, write_tickets};
use std::{io::Write, path::PathBuf};

#[derive(Parser)]
#[command(author, version, about = "Seat groups in a socially distanced theater", long_about = None)]
struct Args {
    /// Request file: one `<group id> <party size>` per line
    input: PathBuf,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Ticket output file (overrides config and MOVIE_SEATS_OUTPUT)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Do not print the final seating chart
    #[arg(long)]
    quiet_grid: bool,
}

fn main() {
    // Initialize logger - defaults to RUST_LOG if set, otherwise INFO
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        error!("Error: {e:#}");

        use std::io::ErrorKind;
        for cause in e.chain() {
            if let Some(ioe) = cause.downcast_ref::<std::io::Error>() {
                match ioe.kind() {
                    ErrorKind::NotFound => {
                        error!("Hint: Provide the request file path relative to the current directory.");
                        break;
                    }
                    ErrorKind::PermissionDenied => {
                        error!("Hint: Run in a writable directory or set MOVIE_SEATS_OUTPUT.");
                        break;
                    }
                    _ => {}
                }
            }
        }
        let _ = std::io::stderr().flush();
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let mut config = Config::load(args.config.as_deref())?;
    if let Some(ref output) = args.output {
        config.output.path = output.clone();
        config.validate()?;
    }
    debug!("{config:?}");

    let mut engine = SeatingEngine::from_config(&config);
    info!("{}", SeatingEngine::version());
    info!("Starting to process {}...", args.input.display());

    let requests = read_requests(&args.input)
        .with_context(|| format!("Failed to read requests from {}", args.input.display()))?;

    let mut seated = 0usize;
    for request in &requests {
        if engine.assign_seats(&request.group, request.party_size) {
            seated += 1;
        }
    }
    info!("Seated {seated} of {} groups", requests.len());

    info!("Done. Writing to {}...", config.output.path.display());
    write_tickets(&engine, &config.output.path)?;

    if !args.quiet_grid {
        println!("final seating: \n");
        print!("{}", engine.render());
    }
    Ok(())
}
