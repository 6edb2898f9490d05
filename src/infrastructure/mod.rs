//! Infrastructure layer - persistence, auth and service implementations

pub mod auth;
pub mod championship;
pub mod enrollment;
pub mod logging;
pub mod storage;
pub mod team;
pub mod user;
