//! Authentication infrastructure module
//!
//! JWT token management for user authentication.

mod jwt;

pub use jwt::{JwtClaims, JwtConfig, JwtGenerator, JwtService};
