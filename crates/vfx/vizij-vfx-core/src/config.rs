//! Serializable setup for a property binder and its binders.

use serde::{Deserialize, Serialize};

use crate::binder::Binder;
use crate::diagnostics::DiagnosticsCfg;
use crate::error::SetupError;

fn default_execute_in_preview() -> bool {
    true
}

/// Everything needed to build a `PropertyBinder` on an owner: its settings and the
/// binders it starts with. Custom binders are host code and can't appear here.
#[derive(Debug, Serialize, Deserialize)]
pub struct BinderSetup {
    pub name: String,
    /// Run binders while the host is in a non-interactive preview.
    #[serde(default = "default_execute_in_preview")]
    pub execute_in_preview: bool,
    #[serde(default)]
    pub diagnostics: DiagnosticsCfg,
    #[serde(default)]
    pub binders: Vec<Binder>,
}

impl BinderSetup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            execute_in_preview: default_execute_in_preview(),
            diagnostics: DiagnosticsCfg::default(),
            binders: Vec::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, SetupError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SetupError> {
        if self.binders.iter().any(|b| matches!(b, Binder::Custom(_))) {
            return Err(SetupError::CustomBinder {
                name: self.name.clone(),
            });
        }
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binder::{BinderKind, TimeBinder};

    #[test]
    fn defaults_apply_to_missing_fields() {
        let setup = BinderSetup::from_json(r#"{ "name": "Sparks" }"#).unwrap();
        assert!(setup.execute_in_preview);
        assert_eq!(setup.diagnostics, DiagnosticsCfg::default());
        assert!(setup.binders.is_empty());
    }

    #[test]
    fn binders_survive_json() {
        let mut setup = BinderSetup::new("Sparks");
        setup.execute_in_preview = false;
        setup.binders.push(TimeBinder::new("clock").into());

        let json = setup.to_json().unwrap();
        let back = BinderSetup::from_json(&json).unwrap();
        assert!(!back.execute_in_preview);
        assert_eq!(back.binders.len(), 1);
        assert_eq!(back.binders[0].kind(), BinderKind::Time);
    }

    #[test]
    fn rejects_malformed_json() {
        let err = BinderSetup::from_json("{ \"binders\": 3 }").unwrap_err();
        assert!(matches!(err, SetupError::Json(_)));
    }
}
