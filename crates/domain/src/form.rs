//! Form dirty tracking for configuration tables.
//!
//! Each table keeps an explicit map from field name to the value captured at
//! render time. Any input event marks its field as changed and enables the
//! table's submit control; nothing re-checks whether the live value has gone
//! back to the original. Only [`ConfigTable::reset`] clears markers and
//! disables the control again.

use indexmap::IndexMap;

use crate::config::RenderedTable;
use crate::error::ValidationError;

/// Live state of one configuration input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    original: String,
    current: String,
    changed: bool,
}

impl FieldState {
    fn new(original: String) -> Self {
        Self {
            current: original.clone(),
            original,
            changed: false,
        }
    }

    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Whether the field carries the "changed" marker.
    #[must_use]
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// Whether the live value differs from the render-time one.
    #[must_use]
    pub fn differs(&self) -> bool {
        self.current != self.original
    }
}

/// Enabled state of a table's submit control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitGate {
    enabled: bool,
}

impl SubmitGate {
    #[must_use]
    pub fn is_enabled(self) -> bool {
        self.enabled
    }
}

/// A configuration table with per-field dirty tracking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigTable {
    name: String,
    fields: IndexMap<String, FieldState>,
    submit: SubmitGate,
}

impl ConfigTable {
    /// Compose a table from `(field, render-time value)` pairs.
    ///
    /// The table comes out already reset, so the submit control starts
    /// disabled whatever happened before composition.
    pub fn compose<I, K, V>(name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut table = Self {
            name: name.into(),
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), FieldState::new(v.into())))
                .collect(),
            submit: SubmitGate::default(),
        };
        table.reset();
        table
    }

    #[must_use]
    pub fn from_rendered(rendered: &RenderedTable) -> Self {
        Self::compose(
            rendered.name.clone(),
            rendered
                .fields
                .iter()
                .map(|f| (f.name.clone(), f.value.clone())),
        )
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// DOM id of this table's submit control.
    #[must_use]
    pub fn submit_id(&self) -> String {
        format!("{}-submit", self.name)
    }

    /// An input event fired on `field` with its new live value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownField`] when the table has no such field.
    pub fn on_field_changed(
        &mut self,
        field: &str,
        value: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let state = self
            .fields
            .get_mut(field)
            .ok_or_else(|| ValidationError::UnknownField {
                field: field.to_string(),
            })?;
        state.current = value.into();
        state.changed = true;
        self.submit.enabled = true;
        Ok(())
    }

    /// Restore every field to its render-time value, clear every marker and
    /// disable the submit control.
    pub fn reset(&mut self) {
        for state in self.fields.values_mut() {
            state.current.clone_from(&state.original);
            state.changed = false;
        }
        self.submit.enabled = false;
    }

    #[must_use]
    pub fn submit(&self) -> SubmitGate {
        self.submit
    }

    #[must_use]
    pub fn is_submit_enabled(&self) -> bool {
        self.submit.enabled
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldState)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Live values of every field in table order, as sent on submit.
    #[must_use]
    pub fn values(&self) -> IndexMap<String, String> {
        self.fields
            .iter()
            .map(|(k, v)| (k.clone(), v.current.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigField, FieldKind};

    fn port_table() -> ConfigTable {
        ConfigTable::compose("webserver", [("port", "8080")])
    }

    #[test]
    fn should_start_with_submit_disabled() {
        let table = port_table();
        assert!(!table.is_submit_enabled());
        assert!(!table.field("port").unwrap().is_changed());
    }

    #[test]
    fn should_enable_submit_and_mark_field_when_changed() {
        let mut table = port_table();
        table.on_field_changed("port", "9090").unwrap();

        let port = table.field("port").unwrap();
        assert!(table.is_submit_enabled());
        assert!(port.is_changed());
        assert_eq!(port.current(), "9090");
    }

    #[test]
    fn should_restore_original_and_disable_submit_when_reset() {
        let mut table = port_table();
        table.on_field_changed("port", "9090").unwrap();

        table.reset();

        let port = table.field("port").unwrap();
        assert_eq!(port.current(), "8080");
        assert!(!port.is_changed());
        assert!(!table.is_submit_enabled());
    }

    #[test]
    fn should_disable_submit_after_reset_regardless_of_event_count() {
        let mut table = ConfigTable::compose("filewatcher", [("a", "1"), ("b", "2")]);
        for i in 0..25 {
            table.on_field_changed("a", i.to_string()).unwrap();
            table.on_field_changed("b", "x").unwrap();
        }

        table.reset();

        assert!(!table.is_submit_enabled());
        assert!(table.fields().all(|(_, f)| !f.is_changed() && !f.differs()));
    }

    #[test]
    fn should_keep_submit_enabled_when_original_value_is_retyped() {
        let mut table = port_table();
        table.on_field_changed("port", "808").unwrap();
        table.on_field_changed("port", "8080").unwrap();

        let port = table.field("port").unwrap();
        assert!(table.is_submit_enabled());
        assert!(port.is_changed());
        assert!(!port.differs());
    }

    #[test]
    fn should_reject_unknown_field_without_enabling_submit() {
        let mut table = port_table();
        let err = table.on_field_changed("host", "x").unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownField {
                field: "host".to_string()
            }
        );
        assert!(!table.is_submit_enabled());
    }

    #[test]
    fn should_compose_from_rendered_table_in_order() {
        let rendered = RenderedTable {
            name: "webserver".to_string(),
            fields: vec![
                ConfigField {
                    name: "PORT".to_string(),
                    kind: FieldKind::Number,
                    value: "8080".to_string(),
                    comment: None,
                },
                ConfigField {
                    name: "MEDIA_FOLDER".to_string(),
                    kind: FieldKind::Text,
                    value: "/srv".to_string(),
                    comment: None,
                },
            ],
        };

        let table = ConfigTable::from_rendered(&rendered);

        assert_eq!(table.submit_id(), "webserver-submit");
        let values: Vec<_> = table.values().into_iter().collect();
        assert_eq!(
            values,
            [
                ("PORT".to_string(), "8080".to_string()),
                ("MEDIA_FOLDER".to_string(), "/srv".to_string()),
            ]
        );
    }
}
