//! Video record store abstraction.
//!
//! The pipeline reads one field and writes one field of a record per
//! ingestion; everything else about persistence is owned by whichever
//! backend sits behind [`VideoStore`]. [`MemoryVideoStore`] backs
//! single-node deployments and tests.

pub mod error;
pub mod store;

pub use error::{DbError, DbResult};
pub use store::{MemoryVideoStore, VideoStore};
