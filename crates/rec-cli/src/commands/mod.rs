//! Subcommand implementations.

pub(crate) mod evaluate;
pub(crate) mod predict;
pub(crate) mod prepare;
pub(crate) mod train;
