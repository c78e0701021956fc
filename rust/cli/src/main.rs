use std::io;

fn main() {
    hexgames_cli::logging::init_logging();
    let code = hexgames_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
