//! Input and output.
//!
//! Input is read through the [builder](crate::builder) methods of a context.

pub mod writer;
