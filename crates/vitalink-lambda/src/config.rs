use std::env;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_BUCKET: &str = "vitalink";
pub const DEFAULT_REGION: &str = "us-east-1";

/// Which backend records are stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    S3,
    /// Process-local map; for `cargo lambda watch` and tests.
    Memory,
}

impl FromStr for StoreKind {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s3" => Ok(StoreKind::S3),
            "memory" => Ok(StoreKind::Memory),
            other => Err(eyre::eyre!(
                "unknown VITALINK_STORE '{other}' (expected 's3' or 'memory')"
            )),
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StoreKind::S3 => "s3",
            StoreKind::Memory => "memory",
        })
    }
}

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bucket: String,
    pub region: String,
    pub store: StoreKind,
}

impl Config {
    /// Read `VITALINK_BUCKET`, `AWS_REGION` and `VITALINK_STORE`.
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from any variable source. Unset or blank variables
    /// fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let store = match var("VITALINK_STORE") {
            Some(value) => value.parse()?,
            None => StoreKind::S3,
        };

        Ok(Self {
            bucket: var("VITALINK_BUCKET").unwrap_or_else(|| DEFAULT_BUCKET.to_string()),
            region: var("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            store,
        })
    }
}
