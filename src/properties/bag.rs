use super::keys::PropertyId;
use crate::error::Result;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::{Arc, RwLock};

/// String-keyed configuration store.
///
/// Only `get_string_value`, `set_string_value` and `entries` are required;
/// the id-based accessors route through the wire names in [`PropertyId`].
pub trait NamedProperties: Send + Sync {
    fn get_string_value(&self, name: &str) -> Result<Option<String>>;

    /// Insert or overwrite `name`
    fn set_string_value(&self, name: &str, value: &str) -> Result<()>;

    /// Snapshot of every visible property
    fn entries(&self) -> Result<BTreeMap<String, String>>;

    fn has_string_value(&self, name: &str) -> Result<bool> {
        Ok(self.get_string_value(name)?.is_some())
    }

    fn get_by_id(&self, id: PropertyId) -> Result<Option<String>> {
        self.get_string_value(id.name())
    }

    fn set_by_id(&self, id: PropertyId, value: &str) -> Result<()> {
        self.set_string_value(id.name(), value)
    }
}

/// In-memory [`NamedProperties`] with optional fallback to a parent store.
///
/// Lookups that miss locally are answered by the parent; writes never reach
/// the parent.
#[derive(Default)]
pub struct PropertyBag {
    values: RwLock<HashMap<String, String>>,
    parent: Option<Arc<dyn NamedProperties>>,
}

impl PropertyBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parent(parent: Arc<dyn NamedProperties>) -> Self {
        Self {
            values: RwLock::default(),
            parent: Some(parent),
        }
    }

    /// Create a bag pre-populated with `values`
    pub fn seeded<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values = values
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            values: RwLock::new(values),
            parent: None,
        }
    }
}

impl NamedProperties for PropertyBag {
    fn get_string_value(&self, name: &str) -> Result<Option<String>> {
        if let Some(value) = self.values.read()?.get(name) {
            return Ok(Some(value.clone()));
        }
        match &self.parent {
            Some(parent) => parent.get_string_value(name),
            None => Ok(None),
        }
    }

    fn set_string_value(&self, name: &str, value: &str) -> Result<()> {
        self.values.write()?.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn entries(&self) -> Result<BTreeMap<String, String>> {
        let mut entries = match &self.parent {
            Some(parent) => parent.entries()?,
            None => BTreeMap::new(),
        };
        let values = self.values.read()?;
        entries.extend(values.iter().map(|(k, v)| (k.clone(), v.clone())));
        Ok(entries)
    }
}

impl fmt::Debug for PropertyBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.values.read().map(|values| values.len()).unwrap_or_default();
        f.debug_struct("PropertyBag")
            .field("len", &len)
            .field("has_parent", &self.parent.is_some())
            .finish()
    }
}
