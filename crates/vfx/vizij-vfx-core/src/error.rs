//! Error types for property binding and operators.

use crate::value::ValueKind;

/// Rejected write into an effect instance.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum EffectError {
    #[error("effect '{effect}' exposes no property named '{property}'")]
    UnknownProperty { effect: String, property: String },

    #[error("property '{property}' expects {expected:?}, got {actual:?}")]
    KindMismatch {
        property: String,
        expected: ValueKind,
        actual: ValueKind,
    },
}

/// Failure raised while a binder updates its target.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum BindingError {
    #[error(transparent)]
    Effect(#[from] EffectError),

    #[error("scene has no source at '{path}'")]
    MissingSource { path: String },

    #[error("scene source '{path}' is {actual:?}, binder expects {expected:?}")]
    SourceKindMismatch {
        path: String,
        expected: ValueKind,
        actual: ValueKind,
    },

    #[error("{0}")]
    Custom(String),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum OperatorError {
    #[error("operator '{operator}' takes {expected} inputs, got {actual}")]
    InputCount {
        operator: &'static str,
        expected: usize,
        actual: usize,
    },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("binder store has no free binder ids left")]
    IdsExhausted,
}

/// Failure while loading a binder setup.
#[derive(thiserror::Error, Debug)]
pub enum SetupError {
    #[error("invalid binder setup JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binder setup '{name}' contains a custom binder, which cannot be loaded")]
    CustomBinder { name: String },
}
