//! clouds2env - convert an OpenStack `clouds.yaml` entry into `OS_` environment variables.
//!
//! This library provides the core functionality for clouds2env, including:
//! - `clouds.yaml` discovery along the openstacksdk search path
//! - Cloud profile lookup
//! - Flattening a profile into `export`/`unset` shell statements
//!
//! # Example
//!
//! ```no_run
//! use clouds2env::config::load_clouds_document;
//! use clouds2env::render::{FlattenOptions, render_profile};
//!
//! let cwd = std::env::current_dir().unwrap();
//! let document = load_clouds_document(None, &cwd).unwrap();
//! let profile = document.profile("devstack").unwrap();
//!
//! for line in render_profile(&profile, &FlattenOptions::default()).unwrap() {
//!     println!("{line}");
//! }
//! ```

pub mod config;
pub mod error;
pub mod render;

pub use error::{Clouds2EnvError, Result};

/// Pick the cloud name from the command line, falling back to `OS_CLOUD`.
///
/// Empty values count as absent.
pub fn resolve_cloud_name(arg: Option<String>, os_cloud: Option<String>) -> Result<String> {
	arg.filter(|name| !name.is_empty())
		.or_else(|| os_cloud.filter(|name| !name.is_empty()))
		.ok_or(Clouds2EnvError::NoCloudSpecified)
}
