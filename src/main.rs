use blinker_lib::{
    devices::cli,
    drivers::{
        interrupt::{self, Running},
        rpi::RpiGpio,
        sleep::ThreadSleep,
    },
    utilities::logger,
};
use std::process;

fn main() {
    let matches = cli::blink_app().get_matches();
    if let Err(error) = logger::init(logger::verbosity(matches.occurrences_of("verbose"))) {
        eprintln!("Failed to set up logging: {}", error);
    }

    let running = Running::new();
    if let Err(error) = interrupt::install(running.clone()) {
        log::warn!("{} (Ctrl+C will not switch the LED off)", error);
    }

    process::exit(cli::run_blink(&matches, running, &mut RpiGpio::new(), &mut ThreadSleep));
}
