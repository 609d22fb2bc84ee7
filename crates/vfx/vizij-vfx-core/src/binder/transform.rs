use serde::{Deserialize, Serialize};

use crate::effect::EffectTarget;
use crate::error::BindingError;
use crate::scene::SceneValues;
use crate::value::{Value, ValueKind};

const POSITION_SUFFIX: &str = "_position";
const ANGLES_SUFFIX: &str = "_angles";
const SCALE_SUFFIX: &str = "_scale";

/// Writes a scene transform into the `{property}_position`, `{property}_angles` and
/// `{property}_scale` Vec3 properties of the effect.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransformBinder {
    pub property: String,
    pub source: String,
}

impl TransformBinder {
    pub fn new(property: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            source: source.into(),
        }
    }

    /// Expanded property names in (position, angles, scale) order.
    pub fn property_names(&self) -> [String; 3] {
        [
            format!("{}{POSITION_SUFFIX}", self.property),
            format!("{}{ANGLES_SUFFIX}", self.property),
            format!("{}{SCALE_SUFFIX}", self.property),
        ]
    }

    pub(crate) fn is_valid(&self, scene: &SceneValues, target: &dyn EffectTarget) -> bool {
        scene.transform(&self.source).is_some()
            && self
                .property_names()
                .iter()
                .all(|name| target.has_property(name, ValueKind::Vec3))
    }

    pub(crate) fn update(
        &self,
        scene: &SceneValues,
        target: &mut dyn EffectTarget,
    ) -> Result<(), BindingError> {
        let tf = scene
            .transform(&self.source)
            .ok_or_else(|| BindingError::MissingSource {
                path: self.source.clone(),
            })?;
        let [position, angles, scale] = self.property_names();
        target.set_property(&position, Value::Vec3(tf.position))?;
        target.set_property(&angles, Value::Vec3(tf.angles))?;
        target.set_property(&scale, Value::Vec3(tf.scale))?;
        Ok(())
    }
}
