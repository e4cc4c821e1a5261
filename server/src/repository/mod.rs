//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod json_file_repo;
mod memory_repo;


pub use traits::Repository;
pub use json_file_repo::JsonFileRepository;
pub use memory_repo::InMemoryRepository;
