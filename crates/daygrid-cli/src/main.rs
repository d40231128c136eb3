#![forbid(unsafe_code)]

fn main() {
    if let Err(error) = daygrid_cli::run_from_env() {
        eprintln!("daygrid: {error}");
        std::process::exit(error.exit_code());
    }
}
