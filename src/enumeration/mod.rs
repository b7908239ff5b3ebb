pub mod enumerator;
pub use enumerator::*;

pub mod histogram;
pub use histogram::*;

pub mod verifier;
pub use verifier::*;

#[cfg(test)]
mod tests;
