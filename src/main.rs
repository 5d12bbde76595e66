// src/main.rs
use sp_wordfreq::progress::ConsoleProgress;
use sp_wordfreq::runner;

fn main() {
    let mut progress = ConsoleProgress;
    if let Err(e) = runner::run(Some(&mut progress)) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
