//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = cuvee_cli::run() {
        eprintln!("cuvee: {err}");
        std::process::exit(1);
    }
}
