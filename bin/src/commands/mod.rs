//! CLI command implementations.

pub(crate) mod defaults;
pub(crate) mod estimate;
pub(crate) mod interactive;
