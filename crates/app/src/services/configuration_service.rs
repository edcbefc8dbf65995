//! Configuration service — render-time tables and their submissions.

use indexmap::IndexMap;

use chainwatch_domain::config::RenderedTable;
use chainwatch_domain::error::{ConsoleError, NotFoundError};

use crate::ports::ConfigurationStore;

/// Application service for the configuration tables shown by the console.
pub struct ConfigurationService<C> {
    store: C,
}

impl<C: ConfigurationStore> ConfigurationService<C> {
    /// Create a new service backed by the given store.
    pub fn new(store: C) -> Self {
        Self { store }
    }

    /// Every table, in display order.
    ///
    /// # Errors
    ///
    /// Returns a store error propagated from the port.
    #[tracing::instrument(skip(self))]
    pub async fn list_tables(&self) -> Result<Vec<RenderedTable>, ConsoleError> {
        let documents = self.store.get_all().await?;
        Ok(documents.iter().map(|doc| doc.render()).collect())
    }

    /// One table by name.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::NotFound`] when no such table exists.
    #[tracing::instrument(skip(self))]
    pub async fn get_table(&self, name: &str) -> Result<RenderedTable, ConsoleError> {
        self.store
            .get(name)
            .await?
            .map(|doc| doc.render())
            .ok_or_else(|| not_found(name))
    }

    /// Apply submitted values to a table.
    ///
    /// Only the submitted fields change; the edit is applied atomically by the
    /// store so overlapping submissions to one table all take effect.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::NotFound`] for an unknown table and
    /// [`ConsoleError::Validation`] when a value does not fit its field.
    #[tracing::instrument(skip(self, values), fields(fields = values.len()))]
    pub async fn submit(
        &self,
        name: &str,
        values: &IndexMap<String, String>,
    ) -> Result<RenderedTable, ConsoleError> {
        let saved = self
            .store
            .update(name, |document| document.apply(values).map_err(ConsoleError::from))
            .await?;
        tracing::info!(table = name, "configuration updated");
        Ok(saved.render())
    }
}

fn not_found(name: &str) -> ConsoleError {
    NotFoundError {
        entity: "Table",
        id: name.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config_store::InMemoryConfigurationStore;
    use chainwatch_domain::config::ConfigDocument;
    use chainwatch_domain::error::ValidationError;
    use serde_json::{Value, json};
    use std::future::Future;

    /// Yields to the scheduler before every store call, so overlapping
    /// submissions interleave.
    struct YieldingStore(InMemoryConfigurationStore);

    impl ConfigurationStore for YieldingStore {
        fn get_all(
            &self,
        ) -> impl Future<Output = Result<Vec<ConfigDocument>, ConsoleError>> + Send {
            async move {
                tokio::task::yield_now().await;
                self.0.get_all().await
            }
        }

        fn get(
            &self,
            name: &str,
        ) -> impl Future<Output = Result<Option<ConfigDocument>, ConsoleError>> + Send {
            async move {
                tokio::task::yield_now().await;
                self.0.get(name).await
            }
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
                tokio::task::yield_now().await;
                self.0.update(name, edit).await
            }
        }
    }

    fn document(name: &str, value: Value) -> ConfigDocument {
        let Value::Object(values) = value else {
            panic!("configuration documents are JSON objects");
        };
        ConfigDocument::new(name, values)
    }

    fn make_service() -> ConfigurationService<InMemoryConfigurationStore> {
        ConfigurationService::new(InMemoryConfigurationStore::new([
            document("filewatcher", json!({"WATCH_DIR": "/srv/in", "POLL": 5})),
            document("webserver", json!({"PORT": 8080, "_package": "webserver"})),
        ]))
    }

    #[tokio::test]
    async fn should_list_tables_in_order() {
        let svc = make_service();

        let tables = svc.list_tables().await.unwrap();

        let names: Vec<_> = tables.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["filewatcher", "webserver"]);
        assert_eq!(tables[1].fields.len(), 1);
    }

    #[tokio::test]
    async fn should_return_not_found_when_table_missing() {
        let svc = make_service();
        let result = svc.get_table("scheduler").await;
        assert!(matches!(result, Err(ConsoleError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_store_submitted_values() {
        let svc = make_service();
        let values = IndexMap::from([("PORT".to_string(), "9090".to_string())]);

        let table = svc.submit("webserver", &values).await.unwrap();

        assert_eq!(table.fields[0].value, "9090");
        let reloaded = svc.get_table("webserver").await.unwrap();
        assert_eq!(reloaded.fields[0].value, "9090");
    }

    #[tokio::test]
    async fn should_keep_every_field_when_submissions_overlap() {
        let svc = ConfigurationService::new(YieldingStore(InMemoryConfigurationStore::new([
            document("webserver", json!({"PORT": 8080, "HOST": "a"})),
        ])));
        let port = IndexMap::from([("PORT".to_string(), "9090".to_string())]);
        let host = IndexMap::from([("HOST".to_string(), "b".to_string())]);

        let (first, second) = tokio::join!(
            svc.submit("webserver", &port),
            svc.submit("webserver", &host)
        );

        assert!(first.is_ok());
        assert!(second.is_ok());
        let table = svc.get_table("webserver").await.unwrap();
        let values: Vec<_> = table
            .fields
            .iter()
            .map(|f| (f.name.as_str(), f.value.as_str()))
            .collect();
        assert_eq!(values, [("PORT", "9090"), ("HOST", "b")]);
    }

    #[tokio::test]
    async fn should_return_not_found_when_submitting_to_missing_table() {
        let svc = make_service();
        let values = IndexMap::from([("PORT".to_string(), "9090".to_string())]);
        let result = svc.submit("scheduler", &values).await;
        assert!(matches!(result, Err(ConsoleError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_reject_value_that_does_not_cast() {
        let svc = make_service();
        let values = IndexMap::from([("POLL".to_string(), "often".to_string())]);

        let result = svc.submit("filewatcher", &values).await;

        assert!(matches!(
            result,
            Err(ConsoleError::Validation(ValidationError::InvalidValue { .. }))
        ));
        let unchanged = svc.get_table("filewatcher").await.unwrap();
        assert_eq!(unchanged.fields[1].value, "5");
    }
}
