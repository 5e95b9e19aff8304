use pawp::cli::PawpCli;

fn main() {
    if let Err(e) = PawpCli::parse().run() {
        eprintln!("pawp error: {:#}", e);
        std::process::exit(1);
    }
}
