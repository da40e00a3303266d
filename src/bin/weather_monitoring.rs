use colored::Colorize;
use std::env;
use std::path::Path;
use std::process;

use design_patterns_demo::config::Scenario;
use design_patterns_demo::demo::run_weather_monitoring;
use design_patterns_demo::logging;
use design_patterns_demo::sink;

fn main() {
    let scenario = match env::args().nth(1) {
        Some(path) => match Scenario::load(Path::new(&path)) {
            Ok(scenario) => scenario,
            Err(err) => {
                eprintln!("{} {err}", "error:".red().bold());
                process::exit(1);
            }
        },
        None => Scenario::default(),
    };

    logging::init(&scenario.log_level);
    run_weather_monitoring(&scenario.readings, sink::stdout());
}
