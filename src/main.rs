use clap::Parser;
use scrim_roster::{args::Args, utils::logging};
use tracing::error;

fn main() {
    dotenv::dotenv().ok();

    let args = Args::parse();
    logging::init(&args.log_level);

    if let Err(e) = scrim_roster::run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}
