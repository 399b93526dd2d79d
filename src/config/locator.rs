use crate::config::parser::parse_clouds_file;
use crate::config::types::CloudsDocument;
use crate::error::{Clouds2EnvError, Result};
use std::path::{Path, PathBuf};

/// File name looked up in the current directory.
pub const CLOUDS_FILE_NAME: &str = "clouds.yaml";

/// System-wide `clouds.yaml` location.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/openstack/clouds.yaml";

/// Build the ordered list of candidate `clouds.yaml` paths.
///
/// The search order matches openstacksdk:
/// 1. `override_path` (from `OS_CLIENT_CONFIG_FILE`), if non-empty
/// 2. `<cwd>/clouds.yaml`
/// 3. `~/.config/openstack/clouds.yaml` (skipped if there is no home directory)
/// 4. `/etc/openstack/clouds.yaml`
pub fn candidate_paths(
	override_path: Option<&Path>,
	cwd: &Path,
	home_dir: Option<&Path>,
) -> Vec<PathBuf> {
	let mut paths = Vec::with_capacity(4);

	if let Some(path) = override_path
		&& !path.as_os_str().is_empty()
	{
		paths.push(path.to_path_buf());
	}

	paths.push(cwd.join(CLOUDS_FILE_NAME));

	if let Some(home) = home_dir {
		paths.push(user_config_path(home));
	}

	paths.push(PathBuf::from(SYSTEM_CONFIG_PATH));
	paths
}

/// Path of the per-user `clouds.yaml` under the given home directory.
pub fn user_config_path(home_dir: &Path) -> PathBuf {
	home_dir
		.join(".config")
		.join("openstack")
		.join(CLOUDS_FILE_NAME)
}

/// Return the first candidate that exists and is a regular file.
pub fn find_config_file(candidates: &[PathBuf]) -> Result<PathBuf> {
	for path in candidates {
		if path.is_file() {
			tracing::debug!(path = %path.display(), "using clouds.yaml");
			return Ok(path.clone());
		}
		tracing::debug!(path = %path.display(), "no clouds.yaml here");
	}

	Err(Clouds2EnvError::ConfigNotFound {
		searched: candidates.to_vec(),
	})
}

/// Locate, parse, and validate the effective `clouds.yaml`.
pub fn load_clouds_document(override_path: Option<&Path>, cwd: &Path) -> Result<CloudsDocument> {
	let home_dir = dirs::home_dir();
	if home_dir.is_none() {
		tracing::warn!("could not resolve home directory; skipping user clouds.yaml");
	}

	let candidates = candidate_paths(override_path, cwd, home_dir.as_deref());
	let path = find_config_file(&candidates)?;
	parse_clouds_file(&path)
}
