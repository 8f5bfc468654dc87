//! Core evaluation logic.

use crate::{environment::Environment, evaluator::EvaluatorOptions, values::Value};

/// If less than this much stack remains, grow it before recursing.
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Evaluator state for one top-level evaluation.
///
/// Builtins receive the evaluator rather than the bare environment so that
/// re-entering evaluation (the `eval` builtin) shares the same depth budget.
pub struct Evaluator<'env> {
    options: EvaluatorOptions,
    env: &'env mut Environment,
    depth: usize,
}

impl<'env> Evaluator<'env> {
    /// Create a new evaluator over the given environment.
    pub fn new(options: EvaluatorOptions, env: &'env mut Environment) -> Self {
        Self {
            options,
            env,
            depth: 0,
        }
    }

    pub fn options(&self) -> &EvaluatorOptions {
        &self.options
    }

    pub fn env_mut(&mut self) -> &mut Environment {
        &mut *self.env
    }

    /// Evaluate a value, consuming it.
    pub fn eval(&mut self, value: Value) -> Value {
        // Check depth before recursing
        if self.depth >= self.options.max_depth {
            tracing::warn!(max_depth = self.options.max_depth, "evaluation depth exceeded");
            return Value::error(format!(
                "evaluation depth exceeds maximum of {} levels",
                self.options.max_depth
            ));
        }

        self.depth += 1;
        let result = stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, || {
            self.eval_inner(value)
        });
        self.depth -= 1;

        result
    }

    /// Inner evaluation logic (no depth tracking).
    fn eval_inner(&mut self, value: Value) -> Value {
        match value {
            Value::Symbol(name) => self.env.get(&name),
            Value::SExpr(cells) => self.eval_sexpr(cells),
            other => other,
        }
    }

    fn eval_sexpr(&mut self, cells: Vec<Value>) -> Value {
        tracing::trace!(depth = self.depth, len = cells.len(), "evaluating s-expression");

        // Children are evaluated strictly left to right. The first error
        // wins and the siblings after it are dropped unevaluated.
        let mut evaluated = Value::sexpr();
        for cell in cells {
            let result = self.eval(cell);
            if result.is_error() {
                return result;
            }
            evaluated = evaluated.add(result);
        }

        match evaluated.len() {
            0 => return evaluated,
            1 => return evaluated.take(0),
            _ => {}
        }

        match evaluated.pop(0) {
            Value::Function(builtin) => {
                tracing::trace!(
                    builtin = builtin.name(),
                    args = evaluated.len(),
                    "calling builtin"
                );
                builtin.call(self, evaluated)
            }
            _ => Value::error("S-expression does not start with a function!"),
        }
    }
}
