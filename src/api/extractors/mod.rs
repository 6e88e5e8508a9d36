//! Custom request extractors.

mod validated_body;

pub use validated_body::ValidatedBody;
