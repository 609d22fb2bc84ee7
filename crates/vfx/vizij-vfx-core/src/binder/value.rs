use serde::{Deserialize, Serialize};

use crate::effect::EffectTarget;
use crate::error::BindingError;
use crate::scene::SceneValues;
use crate::value::ValueKind;

/// Copies the scene value published at `source` into `property`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValueBinder {
    pub property: String,
    pub source: String,
    #[serde(rename = "value_kind")]
    pub kind: ValueKind,
}

impl ValueBinder {
    pub fn new(property: impl Into<String>, source: impl Into<String>, kind: ValueKind) -> Self {
        Self {
            property: property.into(),
            source: source.into(),
            kind,
        }
    }

    pub(crate) fn is_valid(&self, scene: &SceneValues, target: &dyn EffectTarget) -> bool {
        target.has_property(&self.property, self.kind)
            && scene
                .value(&self.source)
                .is_some_and(|value| value.kind() == self.kind)
    }

    pub(crate) fn update(
        &self,
        scene: &SceneValues,
        target: &mut dyn EffectTarget,
    ) -> Result<(), BindingError> {
        let value = scene
            .value(&self.source)
            .ok_or_else(|| BindingError::MissingSource {
                path: self.source.clone(),
            })?;
        if value.kind() != self.kind {
            return Err(BindingError::SourceKindMismatch {
                path: self.source.clone(),
                expected: self.kind,
                actual: value.kind(),
            });
        }
        target.set_property(&self.property, value.clone())?;
        Ok(())
    }
}
