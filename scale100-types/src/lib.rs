//! Type definitions for scale100
//!
//! Plain values decoded from scale responses. They carry no protocol
//! logic; see `scale100-core` for the decoders that produce them.

pub mod parameters;
pub mod weight;

pub use parameters::ScaleParameters;
pub use weight::WeightReading;
