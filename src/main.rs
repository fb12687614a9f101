use std::process::exit;

fn main() {
    if let Err(e) = pagewindow::app::run_cli() {
        eprintln!("{}", pagewindow::app::error_line(&e));
        exit(1);
    }
}
