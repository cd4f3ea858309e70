fn main() {
    if let Err(e) = brewsalts::adapters::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
