//! Request handlers, one submodule per resource.
//!
//! Handlers take one `now` per request for every past/upcoming decision,
//! delegate to the repositories in `fyyur_db` and map errors via
//! [`AppError`](crate::error::AppError).

pub mod artist;
pub mod home;
pub mod show;
pub mod venue;
