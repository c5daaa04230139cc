//! In-memory driven adapters.
//!
//! Each adapter guards its whole store with one `RwLock`. Reads take a
//! consistent copy under the read lock; every mutation completes under a
//! single write lock, so readers see it either fully applied or not at all.

mod catalogue;
mod users;

pub use catalogue::InMemoryCatalogue;
pub use users::InMemoryUserRepository;
