//! Wordlist Passphrase - CLI
//!
//! Prints a passphrase drawn from a wordlist file. The passphrase is the only output on
//! stdout; the pick trace and errors go to stderr.

use clap::Parser;
use colored::Colorize;
use log::LevelFilter;
use rand::TryRngCore;
use rand::rngs::OsRng;
use std::io;
use std::process::ExitCode;
use wordlist_passphrase::cli::{Args, UsageError, run};

/// Exit status for bad options, matching clap's own usage errors
const USAGE_EXIT_CODE: u8 = 2;

fn init_logging(quiet: bool) {
    env_logger::init();
    if quiet {
        log::set_max_level(LevelFilter::Off);
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.quiet);

    let result = {
        let mut input = io::stdin().lock();
        let mut out = io::stdout().lock();
        let mut diag = io::stderr().lock();
        let mut rng = OsRng.unwrap_err();

        run(args, &mut input, &mut out, &mut diag, &mut rng)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            if err.downcast_ref::<UsageError>().is_some() {
                ExitCode::from(USAGE_EXIT_CODE)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
