//! Object creation and capability lookup
//!
//! Everything the factory builds goes through an [`ObjectRegistry`]:
//! - a [`ClassName`] tag selects the constructor
//! - the constructor may receive a [`Site`], the handle the new object uses
//!   to ask its creator for services
//! - the created [`Component`] is cast to the interfaces the caller needs
//!   with [`query_interface`]

mod interface;
mod registry;
mod site;

pub use interface::{query_interface, require_interface, Component, Interface};
pub use registry::{ClassName, Constructor, ObjectRegistry};
pub use site::{query_service, Service, ServiceHandle, ServiceId, Site};
