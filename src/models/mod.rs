//! Data models for Bookrack

pub mod book;

// Re-export commonly used types
pub use book::{Book, BookQuery};
