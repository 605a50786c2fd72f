fn main() {
    if let Err(err) = canti::run() {
        eprintln!("{}", canti::format_error(&err));
        std::process::exit(1);
    }
}
