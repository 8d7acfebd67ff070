extern crate cli;
extern crate error_chain;
extern crate util;

use std::process;

use error_chain::ChainedError;

use cli::parser;
use cli::runner;

fn main() {
    let matches = parser::reducer_command().get_matches();

    if let Err(ref e) = util::init_logger() {
        eprintln!("{}", e.display_chain());
        process::exit(1);
    }

    if let Err(ref e) = runner::run_reducer(&matches) {
        util::output_error(e);
        process::exit(1);
    }
}
