pub mod config;
pub use config::LoaderConfig;

use std::error::Error;

use log::{debug, info};
use rand::Rng;

use crate::record::{employee_key, Employee};
use crate::store::{HashStore, MemoryStore, RedisStore};

/// Writes `count` freshly generated employees to `store` under `employee:0` ..
/// `employee:{count-1}`, in that order
///
/// Stops at the first failed write and returns its error; keys before it stay written.
///
/// Returns the number of records written
pub fn load_employees<S, R>(store: &mut S, rng: &mut R, count: usize) -> Result<usize, Box<dyn Error>>
    where S: HashStore + ?Sized, R: Rng + ?Sized {
    for i in 0..count {
        let key = employee_key(i);
        let employee = Employee::generate(rng);
        debug!("{} => {:?}", key, employee);
        store.set_fields(&key, &employee.fields())?;
    }
    Ok(count)
}

/// Connects to the store described by `config` and loads `config.count` employees into it
///
/// With `config.dry_run` set no connection is made, records go into a `MemoryStore` instead.
///
/// Returns `Err` on connection or authentication failure, or on the first failed write
pub fn run_loader<R: Rng + ?Sized>(config: &LoaderConfig, rng: &mut R) -> Result<usize, Box<dyn Error>> {
    let written = if config.dry_run {
        info!("dry run, generating {} employees without connecting", config.count);
        let mut store = MemoryStore::new();
        load_employees(&mut store, rng, config.count)?
    } else {
        info!("loading {} employees into {}:{}", config.count, config.host, config.port);
        let mut store = RedisStore::connect(&config.host, config.port, config.password.as_deref())?;
        load_employees(&mut store, rng, config.count)?
    };
    info!("{} employees written", written);
    Ok(written)
}
