//! Row models, input DTOs and view models for every table.

pub mod artist;
pub mod show;
pub mod venue;

use fyyur_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// Minimal `{id, name}` reference used by list pages.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct NamedRef {
    pub id: DbId,
    pub name: String,
}

/// `{count, data}` envelope returned by the search endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults<T: Serialize> {
    pub count: usize,
    pub data: Vec<T>,
}

impl<T: Serialize> SearchResults<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}
