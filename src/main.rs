use std::process::exit;

fn main() {
    if let Err(err) = akpors::app::run_cli() {
        eprintln!("error: {err}");
        exit(1);
    }
}
