//! Book model and query types.
//!
//! The title acts as the de-facto unique key: every lookup, duplicate check
//! and delete compares titles case-insensitively.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Book {
    /// Book title - unique within the catalog (case-insensitive)
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,
    /// Author name
    #[validate(length(min = 1, message = "Author must not be empty"))]
    pub author: String,
    /// Book category
    #[validate(length(min = 1, message = "Category must not be empty"))]
    pub category: String,
}

/// Query-string filters for listing books.
/// Each supplied field must match exactly (case-insensitive); absent or
/// empty fields impose no constraint.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct BookQuery {
    /// Filter by category
    pub category: Option<String>,
    /// Filter by author
    pub author: Option<String>,
    /// Filter by title
    pub title: Option<String>,
}
