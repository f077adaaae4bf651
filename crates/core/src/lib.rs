//! Domain types and pure logic for the Fyyur booking directory.
//!
//! Nothing in this crate touches the database or HTTP, so every rule here can
//! be unit tested in isolation and shared by the repository and API layers.

pub mod catalog;
pub mod error;
pub mod search;
pub mod timing;
pub mod types;
pub mod validation;
