use std::error::Error;

use clap::Parser;
use log::error;

use share_price_chart::{
    dataset::INPUT_FILE,
    render::{render, Browser},
};

/// Plot the predicted vs. the close share price from predictions.csv
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {}

fn main() -> Result<(), Box<dyn Error>> {
    let _args = Args::parse();

    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    if let Err(e) = render(INPUT_FILE, &Browser) {
        error!("{}", e);
        return Err(e.into());
    }
    Ok(())
}
