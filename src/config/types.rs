use crate::error::{Clouds2EnvError, Result};
use serde_yaml::{Mapping, Value};
use std::path::PathBuf;

/// Parsed `clouds.yaml` contents: cloud name to profile mapping.
#[derive(Debug, Clone)]
pub struct CloudsDocument {
	/// The `clouds` mapping, in document order.
	pub clouds: Mapping,

	/// The path this document was loaded from.
	pub path: PathBuf,
}

/// Settings for one named cloud.
#[derive(Debug, Clone, Copy)]
pub struct CloudProfile<'a> {
	/// The name the profile was looked up by.
	pub name: &'a str,

	/// The profile's settings, in document order.
	pub settings: &'a Mapping,
}

impl CloudsDocument {
	/// Look up a cloud profile by name.
	pub fn profile<'a>(&'a self, name: &'a str) -> Result<CloudProfile<'a>> {
		let value = self
			.clouds
			.get(name)
			.ok_or_else(|| Clouds2EnvError::CloudNotFound {
				cloud: name.to_string(),
				available: self.cloud_names().map(str::to_string).collect(),
			})?;

		match value {
			Value::Mapping(settings) => Ok(CloudProfile { name, settings }),
			_ => Err(Clouds2EnvError::InvalidProfile {
				cloud: name.to_string(),
			}),
		}
	}

	/// Cloud names in document order.
	pub fn cloud_names(&self) -> impl Iterator<Item = &str> {
		self.clouds.keys().filter_map(Value::as_str)
	}
}
