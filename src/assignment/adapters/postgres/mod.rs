//! `PostgreSQL` adapters for member lookup and assigned task persistence.

mod directory;
mod models;
mod repository;
mod schema;

pub use directory::PostgresMemberDirectory;
pub use repository::PostgresAssignedTaskRepository;

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by assignment adapters.
pub type AssignmentPgPool = Pool<ConnectionManager<PgConnection>>;
