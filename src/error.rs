use std::path::PathBuf;

/// Library-level structured errors for clouds2env.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum Clouds2EnvError {
	#[error("No clouds.yaml file was found (searched: {})", display_paths(.searched))]
	ConfigNotFound { searched: Vec<PathBuf> },

	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Error encountered loading YAML from {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: serde_yaml::Error,
	},

	#[error("No 'clouds' key found in {path}; is this a valid clouds.yaml?")]
	MissingClouds { path: PathBuf },

	#[error("The 'clouds' key in {path} is not a mapping")]
	InvalidClouds { path: PathBuf },

	#[error("no <cloud> argument provided and OS_CLOUD is unset")]
	NoCloudSpecified,

	#[error(
		"Could not find '{cloud}' in your clouds.yaml file (available: {})",
		display_names(.available)
	)]
	CloudNotFound {
		cloud: String,
		available: Vec<String>,
	},

	#[error("Cloud '{cloud}' is not a mapping of settings")]
	InvalidProfile { cloud: String },

	#[error("Value for {key} cannot be quoted for the shell")]
	UnquotableValue {
		key: String,
		#[source]
		source: shlex::QuoteError,
	},
}

fn display_paths(paths: &[PathBuf]) -> String {
	paths
		.iter()
		.map(|p| p.display().to_string())
		.collect::<Vec<_>>()
		.join(", ")
}

fn display_names(names: &[String]) -> String {
	if names.is_empty() {
		"none".to_string()
	} else {
		names.join(", ")
	}
}

/// Result type alias using Clouds2EnvError.
pub type Result<T> = std::result::Result<T, Clouds2EnvError>;
