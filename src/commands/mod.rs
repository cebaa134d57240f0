//! Command implementations for featurepack CLI

pub mod completions;
pub mod generate;
pub mod helpers;
pub mod package;
