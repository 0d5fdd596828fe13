//! Evaluation and assignment protocols.
//!
//! An environment is whatever an expression is applied to: `NullEnv` for a
//! call with no arguments, or a tuple of references (`tie!`) otherwise.
//! Reading and writing are separate traits with separate result types:
//! `Evaluable` produces an owned value, `AssignTarget` yields the storage a
//! write lands in.

/// The environment of a call with no arguments.
///
/// Has no element at any index, so a placeholder evaluated against it does
/// not typecheck.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullEnv;

/// A node that produces a value from an environment.
pub trait Evaluable<Env> {
    type Output;

    fn eval(&self, env: &Env) -> Self::Output;
}

/// A node that denotes a storage location within an environment.
pub trait AssignTarget<Env> {
    type Target;

    fn target<'e>(&self, env: &'e mut Env) -> &'e mut Self::Target;
}

/// Nodes that denote storage for every environment that has it.
///
/// Only nodes with this marker can be the left side of an assignment.
pub trait Lvalue {}

/// Invocation of a node against an environment it may write through.
///
/// Value nodes return their evaluated output; assignments return the
/// written storage, borrowed for as long as the environment is.
pub trait Apply<'e, Env: 'e> {
    type Result;

    fn apply(&self, env: &'e mut Env) -> Self::Result;
}
