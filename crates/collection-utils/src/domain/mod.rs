//! Domain layer - Pure collection operations
//!
//! Every function here is stateless and free of I/O: it borrows its input
//! and returns a freshly allocated result.

pub mod equality;
pub mod grouping;
pub mod hasher;
pub mod sequence;
