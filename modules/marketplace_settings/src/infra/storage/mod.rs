//! Storage layer - local cache adapters

pub mod file_cache;

pub use file_cache::JsonFileCache;
