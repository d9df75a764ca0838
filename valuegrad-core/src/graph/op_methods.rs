// Method sugar over the `ops` functions, so graph building reads `g.mul(w, x)`.
use super::{Graph, ValueId};
use crate::error::GradError;
use crate::ops;

impl Graph {
    pub fn add(&mut self, a: ValueId, b: ValueId) -> Result<ValueId, GradError> {
        ops::arithmetic::add_op(self, a, b)
    }

    pub fn sub(&mut self, a: ValueId, b: ValueId) -> Result<ValueId, GradError> {
        ops::arithmetic::sub_op(self, a, b)
    }

    pub fn mul(&mut self, a: ValueId, b: ValueId) -> Result<ValueId, GradError> {
        ops::arithmetic::mul_op(self, a, b)
    }

    pub fn neg(&mut self, a: ValueId) -> Result<ValueId, GradError> {
        ops::arithmetic::neg_op(self, a)
    }

    /// Raises `a` to a constant real exponent.
    pub fn pow(&mut self, a: ValueId, exponent: f64) -> Result<ValueId, GradError> {
        ops::arithmetic::pow_op(self, a, exponent)
    }

    pub fn div(&mut self, a: ValueId, b: ValueId) -> Result<ValueId, GradError> {
        ops::arithmetic::div_op(self, a, b)
    }

    pub fn tanh(&mut self, a: ValueId) -> Result<ValueId, GradError> {
        ops::activation::tanh_op(self, a)
    }

    pub fn exp(&mut self, a: ValueId) -> Result<ValueId, GradError> {
        ops::math_elem::exp_op(self, a)
    }

    /// Sums `terms` left to right, starting from `start`.
    pub fn sum_from(&mut self, start: ValueId, terms: &[ValueId]) -> Result<ValueId, GradError> {
        ops::reduction::sum_from_op(self, start, terms)
    }
}
