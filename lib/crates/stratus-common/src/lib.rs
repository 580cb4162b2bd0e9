//! Wire types for the Cloud Controller v3 API as consumed by stratus.

pub mod ccv3;

pub use ccv3::*;
