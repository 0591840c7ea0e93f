#![warn(clippy::uninlined_format_args)]

pub mod id_generator;
pub mod json_repository;
pub mod memory_repository;

pub use id_generator::UuidIdGenerator;
pub use json_repository::JsonFileTripRepository;
pub use memory_repository::InMemoryTripRepository;
