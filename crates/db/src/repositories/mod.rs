//! One repository per table. Each is a zero-sized struct with associated
//! async functions taking the pool as first argument.

pub mod artist_repo;
pub mod show_repo;
pub mod venue_repo;

pub use artist_repo::ArtistRepo;
pub use show_repo::ShowRepo;
pub use venue_repo::VenueRepo;
