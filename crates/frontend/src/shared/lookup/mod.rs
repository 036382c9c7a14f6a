//! Related-record lookup popup ("lupicka")
//!
//! Clicking a lookup icon opens the shared overlay with a listing of records; choosing
//! a row writes the record identity back into the originating form field.
//!
//! ## Usage
//!
//! ```ignore
//! // app root
//! let fields = FieldRegistry::new();
//! provide_context(fields);
//! provide_context(LookupOverlayService::new(config, registry, fields));
//!
//! view! {
//!     <LookupInput id="id_source" />
//!     <LookupTrigger kind=TriggerKind::RawId trigger_id="lookup_id_source" href="../../core/source/?pop" />
//!     <LookupOverlayHost />
//! }
//! ```

pub mod api;
pub mod components;
pub mod fields;
pub mod overlay;
pub mod page_globals;
pub mod picker;
pub mod service;

pub use components::{ContentTypeSelect, LookupInput, LookupTrigger, SuggestField};
pub use fields::{FieldHandle, FieldRegistry};
pub use overlay::LookupOverlayHost;
pub use picker::{ClickOutcome, PickerHost, RelatedPicker};
pub use service::LookupOverlayService;
