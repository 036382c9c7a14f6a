//! Related-record lookup ("lupicka") contracts
//!
//! Target-independent building blocks of the lookup popup: configuration,
//! trigger bindings, categories, the content-type registry, overlay content
//! addresses, listing DTOs and the shared overlay surface.
//!
//! ## Flow
//!
//! ```text
//! trigger click ─► TriggerBinding ─► Category / ContentAddress
//!                                         │
//!                        OverlaySurface::attach(session)
//!                                         │
//!               ListingPage loaded ─► RecordChoice ─► target field
//! ```

pub mod address;
pub mod category;
pub mod config;
pub mod content_type;
pub mod error;
pub mod listing;
pub mod session;
pub mod suggest;
pub mod trigger;

pub use address::{record_id_from_href, rewrite_query_link, ContentAddress};
pub use category::Category;
pub use config::LookupConfig;
pub use content_type::{ContentTypeEntry, ContentTypeRegistry};
pub use error::LookupError;
pub use listing::{FilterGroup, FilterPanel, ListingPage, ListingRow, PageLink, RecordChoice};
pub use session::{OverlaySurface, SessionToken};
pub use suggest::SuggestSelection;
pub use trigger::{TriggerBinding, TriggerKind, TriggerTargets};
