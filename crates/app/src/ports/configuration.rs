//! Configuration port — source of the documents rendered as configuration tables.

use std::future::Future;

use chainwatch_domain::config::ConfigDocument;
use chainwatch_domain::error::ConsoleError;

/// Holds the configuration documents the console can edit.
pub trait ConfigurationStore {
    /// All documents, in display order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<ConfigDocument>, ConsoleError>> + Send;

    /// One document by name.
    fn get(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<ConfigDocument>, ConsoleError>> + Send;

    /// Edit the document called `name` in place.
    ///
    /// `edit` runs on a copy while the store is locked against other writers;
    /// the copy replaces the stored document only when `edit` succeeds, so
    /// concurrent partial updates never overwrite each other.
    fn update<F>(
        &self,
        name: &str,
        edit: F,
    ) -> impl Future<Output = Result<ConfigDocument, ConsoleError>> + Send
    where
        F: FnOnce(&mut ConfigDocument) -> Result<(), ConsoleError> + Send;
}
