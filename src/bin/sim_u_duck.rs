use colored::Colorize;
use std::process;

use design_patterns_demo::demo::run_sim_u_duck;
use design_patterns_demo::logging;
use design_patterns_demo::sink;

fn main() {
    logging::init(logging::DEFAULT_LOG_LEVEL);

    if let Err(err) = run_sim_u_duck(sink::stdout()) {
        eprintln!("{} {err}", "error:".red().bold());
        process::exit(2);
    }
}
