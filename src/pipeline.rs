//! Pipeline trait.
use crate::error::Error;

/// A process that can be run end to end,
/// generic over the return type so that pipelines
/// can hand their results back to the caller.
pub trait Pipeline<T> {
    fn run(&self) -> Result<T, Error>;
}
