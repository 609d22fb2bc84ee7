//! Effect instances (the target resource binders write into) and the host seam
//! used to resolve them.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::error::EffectError;
use crate::ids::OwnerId;
use crate::value::{Value, ValueKind};

/// Opaque, non-owning handle to an effect instance. Hosts pick the encoding.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct EffectHandle(pub u64);

/// Capability set binders need from their target.
pub trait EffectTarget {
    fn name(&self) -> &str;

    /// True when the target exposes `property` with exactly `kind`.
    fn has_property(&self, property: &str, kind: ValueKind) -> bool;

    fn set_property(&mut self, property: &str, value: Value) -> Result<(), EffectError>;
}

/// Trait for resolving the effect instance attached to an owner.
/// Adapters (Bevy, tools) implement this and pass it into `PropertyBinder::enable/reset/tick`.
pub trait EffectHost {
    fn resolve(&self, owner: OwnerId) -> Option<EffectHandle>;

    fn effect_mut(&mut self, handle: EffectHandle) -> Option<&mut dyn EffectTarget>;
}

/// A named sheet of exposed properties. The kind of each property is fixed by the
/// value it was declared with.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct EffectInstance {
    pub name: String,
    properties: HashMap<String, Value>,
}

impl EffectInstance {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: HashMap::new(),
        }
    }

    /// Builder form of [`EffectInstance::declare`].
    pub fn with_property(mut self, property: impl Into<String>, default: Value) -> Self {
        self.declare(property, default);
        self
    }

    /// Expose a property. Re-declaring replaces both the kind and the current value.
    pub fn declare(&mut self, property: impl Into<String>, default: Value) {
        self.properties.insert(property.into(), default);
    }

    pub fn get(&self, property: &str) -> Option<&Value> {
        self.properties.get(property)
    }

    pub fn properties(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl EffectTarget for EffectInstance {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_property(&self, property: &str, kind: ValueKind) -> bool {
        self.properties
            .get(property)
            .is_some_and(|current| current.kind() == kind)
    }

    fn set_property(&mut self, property: &str, value: Value) -> Result<(), EffectError> {
        let slot = self
            .properties
            .get_mut(property)
            .ok_or_else(|| EffectError::UnknownProperty {
                effect: self.name.clone(),
                property: property.to_string(),
            })?;
        if slot.kind() != value.kind() {
            return Err(EffectError::KindMismatch {
                property: property.to_string(),
                expected: slot.kind(),
                actual: value.kind(),
            });
        }
        *slot = value;
        Ok(())
    }
}

/// In-memory host: one effect instance per owner. Handles encode the owner id.
#[derive(Default, Debug)]
pub struct EffectInstances {
    pub map: HashMap<OwnerId, EffectInstance>,
}

impl EffectInstances {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, owner: OwnerId, effect: EffectInstance) {
        self.map.insert(owner, effect);
    }

    pub fn detach(&mut self, owner: OwnerId) -> Option<EffectInstance> {
        self.map.remove(&owner)
    }

    pub fn get(&self, owner: OwnerId) -> Option<&EffectInstance> {
        self.map.get(&owner)
    }
}

impl EffectHost for EffectInstances {
    fn resolve(&self, owner: OwnerId) -> Option<EffectHandle> {
        self.map
            .contains_key(&owner)
            .then_some(EffectHandle(owner.0))
    }

    fn effect_mut(&mut self, handle: EffectHandle) -> Option<&mut dyn EffectTarget> {
        self.map
            .get_mut(&OwnerId(handle.0))
            .map(|effect| effect as &mut dyn EffectTarget)
    }
}
