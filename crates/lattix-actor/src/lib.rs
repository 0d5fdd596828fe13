//! # Lattix Actor
//!
//! Deferred expressions. An actor is built from placeholders, constants and
//! operators, and evaluated later against an environment: a tuple of
//! references to the call arguments.
//!
//! ## Architecture
//!
//! ```text
//! operators             ← Zero-sized operation markers over std::ops
//!     │
//! nodes                 ← Placeholder<N>, Value, Unary, Binary, Assignment
//!     │
//! eval                  ← Evaluable (read), AssignTarget (write), Apply
//!     │
//! Actor<E>              ← call / eval / invoke, operator overloads
//!     │
//! placeholders          ← _1 .. _10, arg::<N>()
//! ```
//!
//! ```
//! use lattix_actor::{_1, _2};
//! use lattix_tuple::tie;
//!
//! let mut x = 4;
//! let plus_one = _1 + 1;
//! assert_eq!(plus_one.call(&mut tie!(x)), 5);
//! assert_eq!(x, 4);
//!
//! let mut y = 0;
//! *_2.assign(_1 * 10).call(&mut tie!(x, y)) += 2;
//! assert_eq!(y, 42);
//! ```
//!
//! A placeholder past the end of the environment does not typecheck:
//!
//! ```compile_fail
//! use lattix_actor::_3;
//! use lattix_tuple::tie;
//!
//! let mut x = 1;
//! let mut y = 2;
//! let _ = _3.call(&mut tie!(x, y));
//! ```
//!
//! Neither does assigning through a shared reference:
//!
//! ```compile_fail
//! use lattix_actor::_1;
//! use lattix_tuple::make_tuple;
//!
//! let x = 1;
//! let mut env = make_tuple!(&x);
//! let _ = _1.assign(2).call(&mut env);
//! ```

pub mod actor;
pub mod eval;
pub mod nodes;
pub mod operators;
pub mod placeholders;

pub use actor::{Actor, IntoActor, val};
pub use eval::{Apply, AssignTarget, Evaluable, Lvalue, NullEnv};
pub use nodes::{Assignment, Binary, Placeholder, Unary, Value};
pub use placeholders::{_1, _2, _3, _4, _5, _6, _7, _8, _9, _10, arg};
