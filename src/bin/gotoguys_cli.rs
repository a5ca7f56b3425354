use gotoguys_core::cli::run_cli;

fn main() {
    gotoguys_core::init();
    if let Err(err) = run_cli() {
        eprintln!("fatal: {err}");
        std::process::exit(1);
    }
}
