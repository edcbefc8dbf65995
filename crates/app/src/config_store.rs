//! In-memory configuration store.
//!
//! Documents are loaded once at startup and edits live for the lifetime of
//! the process; nothing is written back to disk.

use std::future::Future;

use indexmap::IndexMap;
use tokio::sync::RwLock;

use chainwatch_domain::config::ConfigDocument;
use chainwatch_domain::error::{ConsoleError, NotFoundError};

use crate::ports::ConfigurationStore;

/// [`ConfigurationStore`] keeping documents in insertion order behind a lock.
#[derive(Debug, Default)]
pub struct InMemoryConfigurationStore {
    documents: RwLock<IndexMap<String, ConfigDocument>>,
}

impl InMemoryConfigurationStore {
    /// Seed the store. A later document replaces an earlier one with the same name.
    pub fn new(documents: impl IntoIterator<Item = ConfigDocument>) -> Self {
        Self {
            documents: RwLock::new(
                documents
                    .into_iter()
                    .map(|doc| (doc.name.clone(), doc))
                    .collect(),
            ),
        }
    }
}

impl ConfigurationStore for InMemoryConfigurationStore {
    fn get_all(&self) -> impl Future<Output = Result<Vec<ConfigDocument>, ConsoleError>> + Send {
        async move { Ok(self.documents.read().await.values().cloned().collect()) }
    }

    fn get(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<ConfigDocument>, ConsoleError>> + Send {
        async move { Ok(self.documents.read().await.get(name).cloned()) }
    }

    fn update<F>(
        &self,
        name: &str,
        edit: F,
    ) -> impl Future<Output = Result<ConfigDocument, ConsoleError>> + Send
    where
        F: FnOnce(&mut ConfigDocument) -> Result<(), ConsoleError> + Send,
    {
        async move {
            let mut documents = self.documents.write().await;
            let slot = documents.get_mut(name).ok_or_else(|| {
                ConsoleError::from(NotFoundError {
                    entity: "Table",
                    id: name.to_string(),
                })
            })?;
            let mut draft = slot.clone();
            edit(&mut draft)?;
            slot.clone_from(&draft);
            Ok(draft)
        }
    }
}
