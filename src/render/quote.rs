use crate::error::{Clouds2EnvError, Result};
use std::borrow::Cow;

/// How values are written on the right-hand side of `export`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuotePolicy {
	/// POSIX shell quoting; `eval` yields the original value.
	#[default]
	Shell,

	/// Emit values verbatim.
	Raw,
}

impl QuotePolicy {
	/// Quote `value` for the variable `name` under this policy.
	pub fn quote<'a>(self, name: &str, value: &'a str) -> Result<Cow<'a, str>> {
		match self {
			QuotePolicy::Raw => Ok(Cow::Borrowed(value)),
			QuotePolicy::Shell => {
				shlex::try_quote(value).map_err(|source| Clouds2EnvError::UnquotableValue {
					key: name.to_string(),
					source,
				})
			}
		}
	}
}
