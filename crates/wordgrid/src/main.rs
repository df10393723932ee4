#![forbid(unsafe_code)]

fn main() {
    if let Err(error) = wordgrid::run_from_env() {
        eprintln!("wordgrid: {error}");
        std::process::exit(error.exit_code());
    }
}
