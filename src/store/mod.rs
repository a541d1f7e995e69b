//! Hash stores the loader can write employee records into
//!
//! `RedisStore` is the real thing: a single synchronous Redis connection. `MemoryStore` keeps
//! everything in an ordered map and is what tests and `--dry-run` use.

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

use log::{debug, info};
use redis::{Client, Commands, Connection, ConnectionAddr, ConnectionInfo, RedisConnectionInfo};

/// Error occurred while talking to a store
#[derive(Debug)]
pub struct StoreError {
    description: String
}

impl StoreError {
    pub fn new(description: &str) -> Self {
        StoreError { description: description.to_owned() }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "store error: {}", self.description)
    }
}

impl Error for StoreError {
}

/// A store holding hash values under string keys
pub trait HashStore {
    /// Sets all `fields` of the hash at `key` in one operation, overwriting fields that
    /// already exist there.
    fn set_fields(&mut self, key: &str, fields: &[(&str, String)]) -> Result<(), Box<dyn Error>>;
}

/// A `HashStore` backed by one Redis connection
pub struct RedisStore {
    connection: Connection,
    addr: String
}

impl RedisStore {
    /// Opens a connection to the Redis server at `host`:`port`
    ///
    /// If `password` is given it is sent with `AUTH` while connecting, so a wrong password fails
    /// here rather than on the first write.
    ///
    /// Returns `Err` if the TCP connection or the authentication fails
    pub fn connect(host: &str, port: u16, password: Option<&str>) -> Result<Self, Box<dyn Error>> {
        let addr = format!("{}:{}", host, port);
        let info = ConnectionInfo {
            addr: ConnectionAddr::Tcp(host.to_owned(), port),
            redis: RedisConnectionInfo {
                db: 0,
                username: None,
                password: password.map(str::to_owned)
            }
        };

        let client = Client::open(info).map_err(|e| {
            StoreError::new(&format!("invalid connection info for {}: {}", addr, e))
        })?;
        let connection = client.get_connection().map_err(|e| {
            StoreError::new(&format!("failed connecting to {}: {}", addr, e))
        })?;

        info!("connected to redis at {}", addr);
        Ok(RedisStore { connection, addr })
    }
}

impl HashStore for RedisStore {
    fn set_fields(&mut self, key: &str, fields: &[(&str, String)]) -> Result<(), Box<dyn Error>> {
        let addr = &self.addr;
        self.connection
            .hset_multiple::<_, _, _, ()>(key, fields)
            .map_err(|e| {
                StoreError::new(&format!("failed writing {} to {}: {}", key, addr, e))
            })?;
        debug!("wrote {} fields to {}", fields.len(), key);
        Ok(())
    }
}

/// An in-memory `HashStore`
///
/// Keys iterate in byte order, so `employee:10` comes before `employee:2`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    hashes: BTreeMap<String, BTreeMap<String, String>>,
    writes: usize
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    pub fn get(&self, key: &str) -> Option<&BTreeMap<String, String>> {
        self.hashes.get(key)
    }

    pub fn keys(&self) -> Vec<&str> {
        self.hashes.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    /// Number of `set_fields` calls so far, including ones that hit an existing key
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl HashStore for MemoryStore {
    fn set_fields(&mut self, key: &str, fields: &[(&str, String)]) -> Result<(), Box<dyn Error>> {
        let hash = self.hashes.entry(key.to_owned()).or_insert_with(BTreeMap::new);
        for (field, value) in fields {
            hash.insert((*field).to_owned(), value.clone());
        }
        self.writes += 1;
        Ok(())
    }
}
