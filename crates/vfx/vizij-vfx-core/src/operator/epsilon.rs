//! Epsilon constant operator.

use super::{Expression, Operator, SlotSpec, ValueType};
use crate::error::OperatorError;
use crate::value::Value;

/// Smallest meaningful value on the effect runtime; guards divisions and
/// normalizations against zero.
pub const VFX_EPSILON: f32 = 1e-5;

/// Epsilon constant for a value type. Vector types get the epsilon in every
/// component; non-float types have no epsilon.
pub fn epsilon_expression(ty: ValueType) -> Option<Expression> {
    let value = match ty {
        ValueType::Float => Value::Float(VFX_EPSILON),
        ValueType::Float2 => Value::Vec2([VFX_EPSILON; 2]),
        ValueType::Float3 => Value::Vec3([VFX_EPSILON; 3]),
        ValueType::Float4 => Value::Vec4([VFX_EPSILON; 4]),
        ValueType::Int32 | ValueType::Uint32 | ValueType::Bool => return None,
    };
    Some(Expression::Constant(value))
}

/// No inputs, one float output holding [`VFX_EPSILON`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Epsilon;

impl Epsilon {
    pub fn evaluate(&self) -> f32 {
        VFX_EPSILON
    }
}

impl Operator for Epsilon {
    fn name(&self) -> &'static str {
        "Epsilon (ε)"
    }

    fn category(&self) -> &'static str {
        "Constants"
    }

    fn output_slots(&self) -> Vec<SlotSpec> {
        vec![SlotSpec {
            name: "ε",
            ty: ValueType::Float,
        }]
    }

    fn build_expressions(&self, inputs: &[Expression]) -> Result<Vec<Expression>, OperatorError> {
        if !inputs.is_empty() {
            return Err(OperatorError::InputCount {
                operator: self.name(),
                expected: 0,
                actual: inputs.len(),
            });
        }
        Ok(vec![Expression::Constant(Value::Float(self.evaluate()))])
    }
}
