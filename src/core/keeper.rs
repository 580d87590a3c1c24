use crate::core::registry::Registry;
use crate::core::serializer::{Serializer, UnknownTypePolicy};
use crate::core::zoo::Zoo;
use crate::core::Storage;
use crate::utils::error::Result;

/// Persists a zoo to one document in a [`Storage`] and restores it again.
pub struct ZooKeeperEngine<S: Storage> {
    storage: S,
    registry: Registry,
    file_name: String,
    unknown_types: UnknownTypePolicy,
}

impl<S: Storage> ZooKeeperEngine<S> {
    pub fn new(storage: S, file_name: impl Into<String>) -> Self {
        Self::with_registry(storage, file_name, Registry::standard())
    }

    pub fn with_registry(storage: S, file_name: impl Into<String>, registry: Registry) -> Self {
        Self {
            storage,
            registry,
            file_name: file_name.into(),
            unknown_types: UnknownTypePolicy::Fail,
        }
    }

    pub fn with_unknown_type_policy(mut self, policy: UnknownTypePolicy) -> Self {
        self.unknown_types = policy;
        self
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn serializer(&self) -> Serializer<'_> {
        Serializer::new(&self.registry).with_unknown_type_policy(self.unknown_types)
    }

    /// Overwrites the stored document with `zoo`. Returns the file name written.
    pub fn persist(&self, zoo: &Zoo) -> Result<String> {
        let text = self.serializer().to_json_string(zoo)?;
        self.storage.write_text(&self.file_name, &text)?;
        tracing::info!(
            "Saved {} animals and {} staff to {}",
            zoo.animal_count(),
            zoo.staff_count(),
            self.file_name
        );
        Ok(self.file_name.clone())
    }

    pub fn restore(&self) -> Result<Zoo> {
        tracing::debug!("Reading zoo document from {}", self.file_name);
        let text = self.storage.read_text(&self.file_name)?;
        let zoo = self.serializer().from_json_str(&text)?;
        tracing::info!(
            "Loaded {} animals and {} staff from {}",
            zoo.animal_count(),
            zoo.staff_count(),
            self.file_name
        );
        Ok(zoo)
    }
}
