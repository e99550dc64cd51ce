//! Font collection model
//!
//! - **universe**: fonts installed on the host, fixed for the session
//! - **store**: favorites and folders, with their membership invariants
//! - **persistence**: the JSON document the store is loaded from and saved to

pub mod error;
pub mod persistence;
pub mod store;
pub mod universe;

pub use error::CollectionError;
pub use persistence::CollectionFile;
pub use store::FontCollection;
pub use universe::FontUniverse;
