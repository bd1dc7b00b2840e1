use std::io;
use std::process;

use clap::{value_t_or_exit, values_t_or_exit, App, Arg};
use linseg::prelude::*;
use log::{error, info};

fn main() {
    env_logger::init();
    match run() {
        Ok(()) => info!("done"),
        Err(e) => {
            error!("fatal error: {}", e);
            process::exit(1);
        }
    }
}

fn run() -> Result<(), ConsoleError> {
    let matches = App::new("linseg")
        .version(linseg::version())
        .about("Line segment intersection and containment demo")
        .arg(
            Arg::with_name("mode")
                .short("m")
                .long("mode")
                .help("Read segments from stdin, or walk through a fixed set")
                .possible_values(&["interactive", "showcase"])
                .default_value("showcase")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("strict")
                .long("strict")
                .help("Reject segments whose start exceeds their end instead of swapping")
                .takes_value(false),
        )
        .arg(
            Arg::with_name("shift")
                .short("s")
                .long("shift")
                .help("Offset applied to the first showcase segment")
                .default_value("3")
                .allow_hyphen_values(true)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("seed")
                .short("S")
                .long("seed")
                .help("Random number seed. Draws the showcase segments at random")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("window")
                .short("w")
                .long("window")
                .help("Bounds that random segments are drawn from")
                .value_names(&["LOW", "HIGH"])
                .number_of_values(2)
                .allow_hyphen_values(true)
                .requires("seed")
                .takes_value(true),
        )
        .get_matches();

    let policy = if matches.is_present("strict") {
        ConstructionPolicy::Strict
    } else {
        ConstructionPolicy::Normalize
    };

    match matches.value_of("mode") {
        Some("interactive") => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut reader = BoundReader::new(stdin.lock(), stdout.lock());
            linseg::run_interactive(&mut reader, policy)?;
        }
        _ => {
            let shift = value_t_or_exit!(matches, "shift", i32);
            let showcase = if matches.is_present("seed") {
                let seed = value_t_or_exit!(matches, "seed", u64);
                let bounds = if matches.is_present("window") {
                    let bounds = values_t_or_exit!(matches, "window", f64);
                    (bounds[0], bounds[1])
                } else {
                    (-10.0, 10.0)
                };
                info!(
                    "drawing showcase segments from {:?} with seed {}",
                    bounds, seed
                );
                Showcase::seeded(seed, bounds, policy)?
            } else {
                Showcase::default()
            };
            let stdout = io::stdout();
            linseg::run_showcase(&showcase, shift, &mut stdout.lock())?;
        }
    }
    Ok(())
}
