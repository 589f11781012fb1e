//! Session-scoped named properties consumed by the downstream engine

mod bag;
mod keys;

pub use bag::{NamedProperties, PropertyBag};
pub use keys::{PropertyId, RecognitionMode};
