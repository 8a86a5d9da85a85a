//!
//! Abstract interfaces for reading a secret back out of its wrapper.
//!

/// Interface to expose a reference to an inner secret
pub trait PeekInterface<S> {
    /// Only method providing access to the secret value.
    fn peek(&self) -> &S;
}

/// Interface that consumes the wrapper and returns the inner secret
pub trait ExposeInterface<S> {
    /// Consume the secret and return its value.
    fn expose(self) -> S;
}
