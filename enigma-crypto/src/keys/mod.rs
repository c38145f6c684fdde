//! Session key material: permutations in array form and the per-session
//! key bundle shared by both endpoints.

pub mod permutation;
pub mod session;

pub use permutation::Permutation;
pub use session::SessionKeys;
