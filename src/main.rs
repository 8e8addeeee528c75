use mavica_copy::{app, cli, output};

fn main() {
    let args = cli::parse();
    if let Err(e) = app::run(args) {
        output::print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
