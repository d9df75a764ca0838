use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckError};
use approx::assert_relative_eq;

#[test]
fn test_sub_forward_and_backward() -> Result<(), GradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(5.0);
    let b = graph.leaf(2.0);
    let c = sub_op(&mut graph, a, b)?;
    assert_relative_eq!(graph.value(c)?, 3.0);
    assert_eq!(graph.op(c)?.tag(), "+", "sub is built as a + (-b)");

    graph.backward(c)?;
    assert_relative_eq!(graph.grad(a)?, 1.0);
    assert_relative_eq!(graph.grad(b)?, -1.0);
    Ok(())
}

#[test]
fn test_sub_self_is_zero_with_zero_gradient() -> Result<(), GradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(5.0);
    let c = sub_op(&mut graph, a, a)?;
    graph.backward(c)?;
    assert_eq!(graph.value(c)?, 0.0);
    assert_relative_eq!(graph.grad(a)?, 0.0);
    Ok(())
}

#[test]
fn test_sub_grad_check() -> Result<(), GradCheckError> {
    check_grad(|g, x| sub_op(g, x[0], x[1]), &[0.3, 0.9], 1e-6, 1e-6)?;
    Ok(())
}
