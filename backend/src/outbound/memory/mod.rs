//! In-process adapters that keep state in memory for the process lifetime.

mod in_memory_user_repository;

pub use in_memory_user_repository::InMemoryUserRepository;
