use crate::config::types::CloudProfile;
use crate::error::Result;
use crate::render::quote::QuotePolicy;
use serde_yaml::Value;

/// Profile key whose sub-keys are flattened into the top-level namespace.
const AUTH_KEY: &str = "auth";

/// Profile keys that never produce output.
const EXCLUDED_KEYS: &[&str] = &["regions"];

/// Profile keys whose list values are joined with commas.
const LIST_KEYS: &[&str] = &["auth_methods"];

/// Whether to set or clear the variables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
	#[default]
	Set,
	Unset,
}

/// Options controlling how a profile is rendered.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlattenOptions {
	pub mode: Mode,
	pub quoting: QuotePolicy,
}

/// A single shell statement for one `OS_` variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
	Export { name: String, value: String },
	Unset { name: String },
}

impl Statement {
	/// Render as a line of shell.
	pub fn render(&self, quoting: QuotePolicy) -> Result<String> {
		match self {
			Statement::Export { name, value } => {
				let value = quoting.quote(name, value)?;
				Ok(format!("export {name}={value}"))
			}
			Statement::Unset { name } => Ok(format!("unset {name}")),
		}
	}
}

/// Build the `OS_` variable name for a profile key.
///
/// ASCII letters are uppercased and every other character outside `[A-Za-z0-9_]`
/// becomes `_`, so the result is always a valid shell identifier.
pub fn env_var_name(key: &str) -> String {
	let suffix: String = key
		.chars()
		.map(|c| {
			if c.is_ascii_alphanumeric() {
				c.to_ascii_uppercase()
			} else {
				'_'
			}
		})
		.collect();
	format!("OS_{suffix}")
}

/// Flatten a profile into statements, in document order.
///
/// `auth` sub-keys share the top-level namespace and `regions` is dropped.
/// In set mode, values that cannot be expressed as a single string are skipped.
pub fn flatten_profile(profile: &CloudProfile<'_>, mode: Mode) -> Vec<Statement> {
	let mut statements = Vec::new();

	for (key, value) in profile.settings {
		let Some(key) = scalar_string(key) else {
			tracing::warn!(cloud = profile.name, "skipping non-scalar key");
			continue;
		};

		if key == AUTH_KEY {
			match value {
				Value::Mapping(auth) => {
					for (sub_key, sub_value) in auth {
						let Some(sub_key) = scalar_string(sub_key) else {
							tracing::warn!(cloud = profile.name, "skipping non-scalar auth key");
							continue;
						};
						push_statement(&mut statements, &sub_key, sub_value, mode);
					}
				}
				_ => tracing::warn!(cloud = profile.name, "'auth' is not a mapping; skipping"),
			}
			continue;
		}

		if EXCLUDED_KEYS.contains(&key.as_str()) {
			tracing::debug!(cloud = profile.name, key = %key, "excluded key");
			continue;
		}

		push_statement(&mut statements, &key, value, mode);
	}

	statements
}

/// Flatten and render a profile into shell lines.
///
/// Every line is rendered before any is returned, so a failure yields no partial output.
pub fn render_profile(profile: &CloudProfile<'_>, options: &FlattenOptions) -> Result<Vec<String>> {
	flatten_profile(profile, options.mode)
		.iter()
		.map(|statement| statement.render(options.quoting))
		.collect()
}

fn push_statement(statements: &mut Vec<Statement>, key: &str, value: &Value, mode: Mode) {
	let name = env_var_name(key);

	match mode {
		Mode::Unset => statements.push(Statement::Unset { name }),
		Mode::Set => match value_string(key, value) {
			Some(value) => statements.push(Statement::Export { name, value }),
			None => tracing::warn!(key, "value cannot be exported as a single variable; skipping"),
		},
	}
}

/// Render a profile value as the string assigned to its variable.
fn value_string(key: &str, value: &Value) -> Option<String> {
	match value {
		Value::Sequence(items) => {
			if !LIST_KEYS.contains(&key) {
				tracing::debug!(key, "joining list value with commas");
			}
			items
				.iter()
				.map(scalar_string)
				.collect::<Option<Vec<_>>>()
				.map(|parts| parts.join(","))
		}
		Value::Mapping(_) => None,
		Value::Tagged(tagged) => value_string(key, &tagged.value),
		scalar => scalar_string(scalar),
	}
}

/// String form of a scalar. Booleans and null print as `True`, `False` and `None`.
fn scalar_string(value: &Value) -> Option<String> {
	match value {
		Value::String(s) => Some(s.clone()),
		Value::Number(n) => Some(n.to_string()),
		Value::Bool(true) => Some("True".to_string()),
		Value::Bool(false) => Some("False".to_string()),
		Value::Null => Some("None".to_string()),
		Value::Tagged(tagged) => scalar_string(&tagged.value),
		Value::Sequence(_) | Value::Mapping(_) => None,
	}
}
