//! Listing Details UI Module
//!
//! Editor of a listing placement, exercising every lookup flavour:
//! - view_model.rs: form DTO and save command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::ListingDetails;
pub use view_model::{ListingDetailsViewModel, ListingFormDto};
