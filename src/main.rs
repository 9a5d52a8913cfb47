// Polygon path tracer made with the Bevy game engine.

use clap::Parser;
use polypath::core::{create_app, CliArgs};
use polypath::utils::logger::init_custom_logger;

fn main() {
    let cli_args = CliArgs::parse();
    init_custom_logger(cli_args.debug);

    match create_app(cli_args) {
        Ok(mut app) => {
            app.run();
        }
        Err(e) => {
            eprintln!("Failed to start: {e}");
            std::process::exit(1);
        }
    }
}
