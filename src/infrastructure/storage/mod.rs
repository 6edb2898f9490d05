//! Storage backend selection and PostgreSQL plumbing

mod postgres;

pub use postgres::{create_pool, ensure_schema, PostgresConfig};

/// Supported storage backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    /// In-memory storage (data lost on restart)
    InMemory,
    /// PostgreSQL database storage
    Postgres,
}

impl StorageType {
    /// Parse a storage type from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "memory" | "inmemory" | "in-memory" | "in_memory" => Some(Self::InMemory),
            "postgres" | "postgresql" | "pg" => Some(Self::Postgres),
            _ => None,
        }
    }
}
