use clap::ArgMatches;
use log::{info, warn};

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 6379;
pub const DEFAULT_PASSWORD: &str = "redis@123";
pub const DEFAULT_COUNT: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    pub host: String,
    pub port: u16,
    pub password: Option<String>,
    pub count: usize,
    pub dry_run: bool
}

impl Default for LoaderConfig {
    fn default() -> Self {
        LoaderConfig {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            password: Some(DEFAULT_PASSWORD.to_owned()),
            count: DEFAULT_COUNT,
            dry_run: false
        }
    }
}

impl LoaderConfig {
    pub fn from_arg_matches(matches: &ArgMatches) -> Self {
        let host =
            matches
                .value_of("host")
                .unwrap_or_else(|| {
                    info!("no host provided from commandline, using default host {}", DEFAULT_HOST);
                    DEFAULT_HOST
                });
        let port =
            matches
                .value_of("port")
                .map(|port| port.parse().unwrap_or_else(|_| {
                    warn!("port provided from commandline was invalid, using default port {}", DEFAULT_PORT);
                    DEFAULT_PORT
                }))
                .unwrap_or_else(|| {
                    info!("no port provided from commandline, using default port {}", DEFAULT_PORT);
                    DEFAULT_PORT
                });
        let password = if matches.is_present("no-password") {
            info!("connecting without a password");
            None
        } else {
            let password =
                matches
                    .value_of("password")
                    .unwrap_or_else(|| {
                        info!("no password provided from commandline, using the default password");
                        DEFAULT_PASSWORD
                    });
            Some(password.to_owned())
        };
        let count =
            matches
                .value_of("count")
                .map(|count| count.parse().unwrap_or_else(|_| {
                    warn!("record count provided from commandline was invalid, using default value {}", DEFAULT_COUNT);
                    DEFAULT_COUNT
                }))
                .unwrap_or_else(|| {
                    info!("no record count provided from commandline, using default value {}", DEFAULT_COUNT);
                    DEFAULT_COUNT
                });
        let dry_run = matches.is_present("dry-run");

        LoaderConfig { host: host.to_owned(), port, password, count, dry_run }
    }
}
