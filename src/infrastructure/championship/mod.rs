//! Championship infrastructure: persistence and the championship service

mod postgres_repository;
mod repository;
mod service;

pub use postgres_repository::PostgresChampionshipRepository;
pub use repository::InMemoryChampionshipRepository;
pub use service::{ChampionshipService, CreateChampionshipRequest, UpdateChampionshipRequest};
