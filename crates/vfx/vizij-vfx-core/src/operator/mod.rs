//! Operators: nodes of the effect expression graph.
//!
//! Only constant operators live here. Each operator declares its output slots and
//! builds one expression per slot; compiling those expressions is the graph
//! compiler's job.

pub mod epsilon;

use serde::{Deserialize, Serialize};

use crate::error::OperatorError;
use crate::value::Value;

/// Value types an expression can carry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Float,
    Float2,
    Float3,
    Float4,
    Int32,
    Uint32,
    Bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    Constant(Value),
}

impl Expression {
    pub fn value_type(&self) -> ValueType {
        match self {
            Expression::Constant(value) => match value {
                Value::Float(_) => ValueType::Float,
                Value::Vec2(_) => ValueType::Float2,
                Value::Vec3(_) => ValueType::Float3,
                Value::Vec4(_) | Value::Color(_) => ValueType::Float4,
                Value::Int(_) => ValueType::Int32,
                Value::Uint(_) => ValueType::Uint32,
                Value::Bool(_) => ValueType::Bool,
            },
        }
    }

    /// Constant-fold the expression.
    pub fn evaluate(&self) -> Value {
        match self {
            Expression::Constant(value) => value.clone(),
        }
    }
}

/// One output (or input) slot of an operator.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SlotSpec {
    pub name: &'static str,
    pub ty: ValueType,
}

pub trait Operator {
    fn name(&self) -> &'static str;

    fn category(&self) -> &'static str;

    fn input_slots(&self) -> Vec<SlotSpec> {
        Vec::new()
    }

    fn output_slots(&self) -> Vec<SlotSpec>;

    /// Build one expression per output slot from the input expressions.
    fn build_expressions(&self, inputs: &[Expression]) -> Result<Vec<Expression>, OperatorError>;

    fn signature(&self) -> OperatorSignature {
        OperatorSignature {
            name: self.name(),
            category: self.category(),
            inputs: self.input_slots(),
            outputs: self.output_slots(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OperatorSignature {
    pub name: &'static str,
    pub category: &'static str,
    pub inputs: Vec<SlotSpec>,
    pub outputs: Vec<SlotSpec>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OperatorLibrary {
    pub version: &'static str,
    pub operators: Vec<OperatorSignature>,
}

/// Signatures of every built-in operator, for editors and registry export.
pub fn library() -> OperatorLibrary {
    OperatorLibrary {
        version: env!("CARGO_PKG_VERSION"),
        operators: vec![epsilon::Epsilon.signature()],
    }
}
