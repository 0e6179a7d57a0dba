use std::io::stdin;

use clap::Parser;

use crate::service::data_manager::DataManager;

mod model;
mod service;
mod ui;

#[derive(Parser, Debug)]
#[command(name = "champdex")]
#[command(about = "Terminal catalog browser for League of Legends champions")]
struct Args {
    /// Locale for champion data and tag labels (e.g. pt_BR, en_US)
    #[arg(long, default_value = "pt_BR")]
    locale: String,

    /// Pin a specific data version instead of resolving the newest patch
    #[arg(long)]
    data_version: Option<String>,
}

fn main() {
    let args = Args::parse();

    match DataManager::new(args.locale, args.data_version) {
        Ok(manager) => match ui::repl::run(manager) {
            Ok(_) => return,
            Err(error) => println!("Error occurred while running the browser:\n{}\n", error),
        },
        Err(error) => println!("Failed to load the champion catalog:\n{}\n", error),
    };

    let mut s = String::new();
    println!("Press Enter to exit");
    let _ = stdin().read_line(&mut s);
}
