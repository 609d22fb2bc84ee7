//! Per-tick snapshot of the scene values binders sample.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Decomposed world transform of a scene object. Angles are Euler XYZ in degrees.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneTransform {
    pub position: [f32; 3],
    pub angles: [f32; 3],
    pub scale: [f32; 3],
}

impl Default for SceneTransform {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            angles: [0.0; 3],
            scale: [1.0; 3],
        }
    }
}

impl SceneTransform {
    pub fn from_position(position: [f32; 3]) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }
}

/// Values published by the host for the current tick, keyed by path.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SceneValues {
    /// Elapsed seconds since the host started ticking.
    pub time: f32,
    /// Seconds since the previous tick.
    pub delta: f32,
    #[serde(default)]
    values: HashMap<String, Value>,
    #[serde(default)]
    transforms: HashMap<String, SceneTransform>,
}

impl SceneValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_time(&mut self, time: f32, delta: f32) {
        self.time = time;
        self.delta = delta;
    }

    pub fn set_value(&mut self, path: impl Into<String>, value: Value) {
        self.values.insert(path.into(), value);
    }

    pub fn value(&self, path: &str) -> Option<&Value> {
        self.values.get(path)
    }

    pub fn remove_value(&mut self, path: &str) -> Option<Value> {
        self.values.remove(path)
    }

    pub fn set_transform(&mut self, path: impl Into<String>, transform: SceneTransform) {
        self.transforms.insert(path.into(), transform);
    }

    pub fn transform(&self, path: &str) -> Option<&SceneTransform> {
        self.transforms.get(path)
    }

    /// Drop every transform; hosts republish them each tick from live objects.
    pub fn clear_transforms(&mut self) {
        self.transforms.clear();
    }
}
