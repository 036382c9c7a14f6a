use thiserror::Error;

/// Non-fatal lookup failures.
///
/// Every variant aborts only the interaction that produced it; the page stays usable
/// and the form field keeps its previous value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Malformed lookup trigger id: {trigger_id}")]
    MalformedTriggerId { trigger_id: String },

    #[error("Could not get suggester input for {trigger_id} (expected #{input_id})")]
    MissingSuggestInput { trigger_id: String, input_id: String },

    #[error("Unexpected href of related lookup: {href}")]
    UnexpectedHref { href: String },

    #[error("Could not get raw id input from lupicka icon #{trigger_id}")]
    MissingRawIdInput { trigger_id: String },

    #[error("Could not find id input and/or content-type input for lupicka #{trigger_id}")]
    MissingGenericInputs { trigger_id: String },

    #[error("Unrecognized Content-Type id: {ct_id}")]
    UnknownContentType { ct_id: String },

    #[error("Malformed content-type path: {path}")]
    MalformedContentTypePath { path: String },

    #[error("No input is set up for {target}.")]
    NoSessionAttached { target: String },

    #[error("Malformed content address: {address}")]
    MalformedAddress { address: String },
}
