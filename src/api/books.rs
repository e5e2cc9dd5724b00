//! Book (catalog) endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookQuery},
};

/// List books with optional filters
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "List of matching books", body = Vec<Book>)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(query): Query<BookQuery>,
) -> Json<Vec<Book>> {
    let books = state.services.catalog.list(&query).await;
    Json(books)
}

/// Add a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = Book,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Invalid input or title already exists", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_book(
    State(state): State<crate::AppState>,
    Json(book): Json<Book>,
) -> AppResult<(StatusCode, Json<Book>)> {
    book.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let created = state.services.catalog.add(book).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace an existing book's author and category.
/// The record to replace is identified by the path title; the body title
/// must match it, and the stored title is never overwritten.
#[utoipa::path(
    put,
    path = "/books/{title}",
    tag = "books",
    params(
        ("title" = String, Path, description = "Title of the book to replace (case-insensitive)")
    ),
    request_body = Book,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Invalid input or body title differs from path title", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn replace_book(
    State(state): State<crate::AppState>,
    Path(title): Path<String>,
    Json(book): Json<Book>,
) -> AppResult<Json<Book>> {
    book.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    if book.title.to_lowercase() != title.to_lowercase() {
        return Err(AppError::BadRequest(format!(
            "Body title '{}' does not match path title '{}'",
            book.title, title
        )));
    }

    let updated = state.services.catalog.replace(&title, book).await?;
    Ok(Json(updated))
}

/// Remove a book by title
#[utoipa::path(
    delete,
    path = "/books/{title}",
    tag = "books",
    params(
        ("title" = String, Path, description = "Title of the book to remove (case-insensitive)")
    ),
    responses(
        (status = 204, description = "Book removed"),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn remove_book(
    State(state): State<crate::AppState>,
    Path(title): Path<String>,
) -> AppResult<StatusCode> {
    state.services.catalog.remove(&title).await?;
    Ok(StatusCode::NO_CONTENT)
}
