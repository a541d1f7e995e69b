use std::process;

use clap::{App, Arg};
use log::error;

use kvfill::loader::{run_loader, LoaderConfig};

fn main() {
    env_logger::init();

    let matches = App::new("kvfill")
        .version("0.1")
        .author("ICEY <icey@icey.tech>")
        .about("Fills a Redis instance with random employee records")
        .arg(Arg::with_name("host")
            .short("H")
            .long("host")
            .value_name("HOST")
            .help("Redis host to connect to")
            .takes_value(true))
        .arg(Arg::with_name("port")
            .short("p")
            .long("port")
            .value_name("PORT")
            .help("Redis port to connect to")
            .takes_value(true))
        .arg(Arg::with_name("password")
            .short("a")
            .long("password")
            .value_name("PASSWORD")
            .help("Password sent with AUTH when connecting")
            .takes_value(true))
        .arg(Arg::with_name("no-password")
            .long("no-password")
            .help("Connect without AUTH")
            .conflicts_with("password"))
        .arg(Arg::with_name("count")
            .short("n")
            .long("count")
            .value_name("COUNT")
            .help("Number of employee records to write")
            .takes_value(true))
        .arg(Arg::with_name("dry-run")
            .long("dry-run")
            .help("Generate records in memory without connecting"))
        .get_matches();

    let config = LoaderConfig::from_arg_matches(&matches);
    match run_loader(&config, &mut rand::thread_rng()) {
        Ok(written) if config.dry_run => {
            println!("Dry run: generated {} employee records, nothing written", written);
        }
        Ok(_) => {
            println!("Dummy employee data added to Redis successfully!");
        }
        Err(e) => {
            error!("loading employees into {}:{} failed: {}", config.host, config.port, e);
            eprintln!("critical error occurred while loading employees, shutting down");
            eprintln!("detailed error info: {}", e);
            process::exit(1);
        }
    }
}
