//! Configuration loading and parsing for clouds2env.
//!
//! This module handles:
//! - `clouds.yaml` search path discovery
//! - YAML parsing and `clouds` key validation
//! - Cloud profile lookup

pub mod locator;
pub mod parser;
pub mod types;

pub use locator::{candidate_paths, find_config_file, load_clouds_document, user_config_path};
pub use parser::{parse_clouds_file, parse_clouds_str};
pub use types::{CloudProfile, CloudsDocument};
