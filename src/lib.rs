//! Walkability Policy Library.
//! Handles route identity, complaint-escalation thresholds, and the
//! community records (ratings, street issues, complaints, score locks)
//! that reference a route.
//!
//! Map rendering, geocoding, routing, and the hosted database stay
//! outside this crate; the [`store::WalkabilityStore`] trait is the
//! seam where the backend plugs in.

pub mod types {
    pub mod contribution;
    pub mod location;
    pub mod record;
    pub mod score;
}

pub mod utils {
    pub mod format;
    pub mod generator;
}

pub mod community;
pub mod policy;
pub mod session;
pub mod store;

mod error;

pub use error::Error;
pub use types::contribution;
pub use types::location;
pub use types::record;
pub use types::score;
