use std::{io, process};

use startup_reporter::{
    display_error,
    reporter::{reporter::run, steps::startup_program},
};

fn main() {
    let program = startup_program();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(error) = run(&program, &mut out) {
        display_error(&error);
        process::exit(1);
    }
}
