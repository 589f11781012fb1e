use super::registry::ObjectRegistry;
use crate::error::{Result, SpeechError};
use crate::properties::NamedProperties;
use crate::session::Session;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Services a site can be asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ServiceId {
    NamedProperties,
    ObjectRegistry,
    Session,
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ServiceId::NamedProperties => "NamedProperties",
            ServiceId::ObjectRegistry => "ObjectRegistry",
            ServiceId::Session => "Session",
        };
        f.write_str(name)
    }
}

/// A service returned from [`Site::query_service`].
#[derive(Clone)]
pub enum ServiceHandle {
    NamedProperties(Arc<dyn NamedProperties>),
    ObjectRegistry(Arc<ObjectRegistry>),
    Session(Arc<dyn Session>),
}

impl fmt::Debug for ServiceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceHandle::NamedProperties(_) => f.write_str("ServiceHandle::NamedProperties"),
            ServiceHandle::ObjectRegistry(registry) => {
                f.debug_tuple("ServiceHandle::ObjectRegistry").field(registry).finish()
            }
            ServiceHandle::Session(session) => f
                .debug_tuple("ServiceHandle::Session")
                .field(&session.id())
                .finish(),
        }
    }
}

/// The handle a created object uses to ask its creator or host for services.
///
/// Sites answer what they can and forward the rest to their own creator, so
/// a recognizer asking its session for the registry reaches the factory.
pub trait Site: Send + Sync {
    fn query_service(&self, service: ServiceId) -> Option<ServiceHandle>;
}

/// A service type that can be fetched from a [`Site`].
pub trait Service: Send + Sync + 'static {
    const ID: ServiceId;

    fn from_handle(handle: ServiceHandle) -> Option<Arc<Self>>;
}

impl Service for dyn NamedProperties {
    const ID: ServiceId = ServiceId::NamedProperties;

    fn from_handle(handle: ServiceHandle) -> Option<Arc<Self>> {
        match handle {
            ServiceHandle::NamedProperties(properties) => Some(properties),
            _ => None,
        }
    }
}

impl Service for ObjectRegistry {
    const ID: ServiceId = ServiceId::ObjectRegistry;

    fn from_handle(handle: ServiceHandle) -> Option<Arc<Self>> {
        match handle {
            ServiceHandle::ObjectRegistry(registry) => Some(registry),
            _ => None,
        }
    }
}

impl Service for dyn Session {
    const ID: ServiceId = ServiceId::Session;

    fn from_handle(handle: ServiceHandle) -> Option<Arc<Self>> {
        match handle {
            ServiceHandle::Session(session) => Some(session),
            _ => None,
        }
    }
}

/// Ask `site` for the service `S`.
pub fn query_service<S: Service + ?Sized>(site: &dyn Site) -> Result<Arc<S>> {
    site.query_service(S::ID)
        .and_then(S::from_handle)
        .ok_or(SpeechError::ServiceUnavailable(S::ID))
}
