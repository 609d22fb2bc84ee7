use serde::{Deserialize, Serialize};

use crate::effect::EffectTarget;
use crate::error::BindingError;
use crate::scene::SceneValues;
use crate::value::{Value, ValueKind};

/// Writes the host's elapsed time (seconds) into a float property.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeBinder {
    pub property: String,
}

impl TimeBinder {
    pub fn new(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
        }
    }

    pub(crate) fn is_valid(&self, target: &dyn EffectTarget) -> bool {
        target.has_property(&self.property, ValueKind::Float)
    }

    pub(crate) fn update(
        &self,
        scene: &SceneValues,
        target: &mut dyn EffectTarget,
    ) -> Result<(), BindingError> {
        target.set_property(&self.property, Value::Float(scene.time))?;
        Ok(())
    }
}
