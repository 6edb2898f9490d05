//! Enrollment infrastructure: persistence and the enrollment engine

mod postgres_repository;
mod repository;
mod service;

pub use postgres_repository::PostgresEnrollmentRepository;
pub use repository::InMemoryEnrollmentRepository;
pub use service::EnrollmentService;
