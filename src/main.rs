mod app;
mod config;
mod error;
mod events;
mod logger;
mod stable;
mod state;
mod ui;

use crate::app::App;
use crate::config::Config;
use crate::state::Route;
use anyhow::Result;
use clap::{App as Cli, Arg};

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Cli::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about("Terminalowy panel administracyjny stajni koni")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory containing the configuration file")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("url")
                .short("u")
                .long("url")
                .value_name("URL")
                .help("Base URL of the stable service, overrides the configuration")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("path")
                .value_name("PATH")
                .help("Initial screen path, e.g. /, /add or /edit/3")
                .index(1),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    if let Some(url) = matches.value_of("url") {
        config.base_url = url.to_string();
    }

    let initial_route = Route::parse(matches.value_of("path").unwrap_or("/"));
    App::start(config, initial_route).await
}
