//! Rendering cloud profiles as shell statements.
//!
//! This module handles:
//! - Flattening a profile (and its `auth` section) into `OS_` variables
//! - Set and unset modes
//! - Shell quoting of values

pub mod flatten;
pub mod quote;

pub use flatten::{
	FlattenOptions, Mode, Statement, env_var_name, flatten_profile, render_profile,
};
pub use quote::QuotePolicy;
