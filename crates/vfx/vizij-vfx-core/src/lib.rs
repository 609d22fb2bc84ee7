//! Vizij VFX Core (engine-agnostic)
//!
//! Property binding for visual effects: a `PropertyBinder` walks its ordered list of
//! binders every tick and pushes scene values into the exposed properties of an effect
//! instance. Hosts (Bevy, tests, tools) own the binder storage and the effect instances
//! and drive the lifecycle explicitly through `enable`, `reset`, `disable` and `tick`.
//!
//! The `operator` module holds the constant expression nodes consumed by the effect
//! graph compiler (the compiler itself lives elsewhere).

pub mod binder;
pub mod config;
pub mod diagnostics;
pub mod effect;
pub mod error;
pub mod ids;
pub mod operator;
pub mod property_binder;
pub mod scene;
pub mod store;
pub mod value;

// Re-exports for consumers (adapters)
pub use binder::{Binder, BinderKind, CustomBinder, TimeBinder, TransformBinder, ValueBinder};
pub use config::BinderSetup;
pub use diagnostics::{BindingDiagnostic, DiagnosticsCfg, TickReport};
pub use effect::{EffectHandle, EffectHost, EffectInstance, EffectInstances, EffectTarget};
pub use error::{BindingError, EffectError, OperatorError, SetupError, StoreError};
pub use ids::{BinderId, OwnerId};
pub use operator::{epsilon::Epsilon, epsilon::VFX_EPSILON, Expression, Operator, ValueType};
pub use property_binder::{HostMode, PropertyBinder, TickContext};
pub use scene::{SceneTransform, SceneValues};
pub use store::BinderStore;
pub use value::{Value, ValueKind};
