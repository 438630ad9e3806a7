//! Property-based tests for the MST engines.
//!
//! Generated graphs cover distinct, tied, signed, sparse, dense, and
//! disconnected weightings. The properties check that both engines agree on
//! cost, that their output is structurally a spanning tree or forest, that
//! the tree satisfies the cycle optimality condition, and that reruns and
//! input permutations do not change the outcome.

mod equivalence;
mod helpers;
mod strategies;
mod structural;
mod types;
