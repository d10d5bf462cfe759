fn main() {
    if let Err(err) = loan_decision::cli::run() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}
