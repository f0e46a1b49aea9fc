use driftfield::Backdrop;

fn main() {
    if let Err(e) = Backdrop::new().run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
