extern crate brewstat;
extern crate chrono;
#[macro_use]
extern crate clap;
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;
#[macro_use]
extern crate prettytable;
extern crate util;

use errors::*;

mod errors {
    error_chain! {
        links {
            Brewstat(::brewstat::Error, ::brewstat::ErrorKind);
        }

        foreign_links {
            Clap(::clap::Error);
            Io(::std::io::Error);
        }
    }
}

mod config;
mod display;
mod parser;
mod runner;

fn main() {
    let matches = parser::parse_command_line();

    let logger_ready = match util::init_logger(matches.is_present("verbose")) {
        Ok(()) => true,
        Err(err) => {
            eprintln!("Error: {}", err);
            false
        }
    };

    if let Err(ref e) = run(&matches) {
        if logger_ready {
            util::output_error(e);
        } else {
            eprintln!("Error: {}", e);
            for e in e.iter().skip(1) {
                eprintln!("Caused by: {}", e);
            }
        }

        ::std::process::exit(1);
    }

    ::std::process::exit(0);
}

fn run(matches: &clap::ArgMatches) -> Result<()> {
    let config = config::DriverConfig::from_matches(matches).chain_err(
        || "Invalid command line arguments",
    )?;
    debug!("Running with {:?}", config);

    runner::run(&config)
}
