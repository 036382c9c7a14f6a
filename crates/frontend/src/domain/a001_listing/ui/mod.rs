pub mod details;

pub use details::ListingDetails;
