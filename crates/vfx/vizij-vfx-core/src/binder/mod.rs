//! Binders: each one maps a scene value onto exposed properties of an effect.
//!
//! Built-in binders are variants of [`Binder`] and are dispatched with a `match`.
//! Hosts that need their own sources implement [`CustomBinder`] and wrap it in
//! [`Binder::Custom`].

mod time;
mod transform;
mod value;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::effect::EffectTarget;
use crate::error::BindingError;
use crate::scene::SceneValues;

pub use time::TimeBinder;
pub use transform::TransformBinder;
pub use value::ValueBinder;

/// Kind tag used by the registry operations (remove-all-of-kind, enumerate-by-kind).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinderKind {
    Value,
    Time,
    Transform,
    /// Host-defined binder, tagged by `CustomBinder::kind_name`.
    Custom(&'static str),
}

/// Extension point for binders the core doesn't know about.
pub trait CustomBinder: fmt::Debug + Send + Sync {
    fn kind_name(&self) -> &'static str;

    fn is_valid(&self, scene: &SceneValues, target: &dyn EffectTarget) -> bool;

    fn update(
        &mut self,
        scene: &SceneValues,
        target: &mut dyn EffectTarget,
    ) -> Result<(), BindingError>;
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Binder {
    Value(ValueBinder),
    Time(TimeBinder),
    Transform(TransformBinder),
    #[serde(skip)]
    Custom(Box<dyn CustomBinder>),
}

impl Binder {
    pub fn kind(&self) -> BinderKind {
        match self {
            Binder::Value(_) => BinderKind::Value,
            Binder::Time(_) => BinderKind::Time,
            Binder::Transform(_) => BinderKind::Transform,
            Binder::Custom(custom) => BinderKind::Custom(custom.kind_name()),
        }
    }

    /// Whether `update` can run against this target with the current scene.
    pub fn is_valid(&self, scene: &SceneValues, target: &dyn EffectTarget) -> bool {
        match self {
            Binder::Value(b) => b.is_valid(scene, target),
            Binder::Time(b) => b.is_valid(target),
            Binder::Transform(b) => b.is_valid(scene, target),
            Binder::Custom(b) => b.is_valid(scene, target),
        }
    }

    pub fn update(
        &mut self,
        scene: &SceneValues,
        target: &mut dyn EffectTarget,
    ) -> Result<(), BindingError> {
        match self {
            Binder::Value(b) => b.update(scene, target),
            Binder::Time(b) => b.update(scene, target),
            Binder::Transform(b) => b.update(scene, target),
            Binder::Custom(b) => b.update(scene, target),
        }
    }
}

impl fmt::Display for Binder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Binder::Value(b) => write!(f, "Value : '{}' -> {}", b.source, b.property),
            Binder::Time(b) => write!(f, "Time : {}", b.property),
            Binder::Transform(b) => write!(f, "Transform : '{}' -> {}", b.source, b.property),
            Binder::Custom(b) => write!(f, "{} (custom)", b.kind_name()),
        }
    }
}

impl From<ValueBinder> for Binder {
    fn from(b: ValueBinder) -> Self {
        Binder::Value(b)
    }
}

impl From<TimeBinder> for Binder {
    fn from(b: TimeBinder) -> Self {
        Binder::Time(b)
    }
}

impl From<TransformBinder> for Binder {
    fn from(b: TransformBinder) -> Self {
        Binder::Transform(b)
    }
}
