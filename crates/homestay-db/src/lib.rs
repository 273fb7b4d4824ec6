//! # homestay-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `homestay-core`. It handles:
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! The `acceptance_schedules` table carries an exclusion constraint that
//! rejects overlapping stays for a host even when two writers race past the
//! service-level check.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use homestay_db::{create_pool, PoolConfig, PgScheduleRepository};
//! use homestay_core::traits::ScheduleRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::new("postgres://localhost/homestay")).await?;
//!     let schedules = PgScheduleRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, default_migrations_dir, ping, run_migrations, PgPool, PoolConfig};
pub use repositories::{PgHostRepository, PgScheduleRepository, PgStudentRepository};
