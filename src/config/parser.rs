use crate::config::types::CloudsDocument;
use crate::error::{Clouds2EnvError, Result};
use serde::de::{self, Deserialize, Deserializer, EnumAccess, MapAccess, SeqAccess, VariantAccess};
use serde_yaml::value::{Tag, TaggedValue};
use serde_yaml::{Mapping, Value};
use std::fmt;
use std::path::Path;

/// Parse a `clouds.yaml` file from the given path.
pub fn parse_clouds_file(path: &Path) -> Result<CloudsDocument> {
	let content =
		std::fs::read_to_string(path).map_err(|source| Clouds2EnvError::ConfigReadError {
			path: path.to_path_buf(),
			source,
		})?;

	parse_clouds_str(&content, path)
}

/// Parse a `clouds.yaml` document from a string (useful for testing).
///
/// Merge keys (`<<: *anchor`) are resolved and duplicate keys keep the last value.
/// The document must be a mapping with a `clouds` key whose value is itself a mapping.
pub fn parse_clouds_str(content: &str, path: &Path) -> Result<CloudsDocument> {
	let parse_error = |source: serde_yaml::Error| Clouds2EnvError::ConfigParseError {
		path: path.to_path_buf(),
		source,
	};

	let LastWinsValue(mut raw) = serde_yaml::from_str(content).map_err(parse_error)?;
	raw.apply_merge().map_err(parse_error)?;

	// An empty file parses as null; treat any non-mapping like a missing key
	let clouds = raw
		.as_mapping()
		.and_then(|top| top.get("clouds"))
		.ok_or_else(|| Clouds2EnvError::MissingClouds {
			path: path.to_path_buf(),
		})?;

	match clouds {
		Value::Mapping(clouds) => Ok(CloudsDocument {
			clouds: clouds.clone(),
			path: path.to_path_buf(),
		}),
		_ => Err(Clouds2EnvError::InvalidClouds {
			path: path.to_path_buf(),
		}),
	}
}

/// A YAML value whose mappings keep the last of any duplicate keys.
///
/// `serde_yaml::Mapping` rejects duplicates outright.
struct LastWinsValue(Value);

impl<'de> Deserialize<'de> for LastWinsValue {
	fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_any(LastWinsVisitor).map(LastWinsValue)
	}
}

struct LastWinsVisitor;

impl<'de> de::Visitor<'de> for LastWinsVisitor {
	type Value = Value;

	fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
		formatter.write_str("any YAML value")
	}

	fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<Value, E> {
		Ok(Value::Bool(v))
	}

	fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Value, E> {
		Ok(Value::Number(v.into()))
	}

	fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Value, E> {
		Ok(Value::Number(v.into()))
	}

	fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Value, E> {
		Ok(Value::Number(v.into()))
	}

	fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Value, E> {
		Ok(Value::String(v.to_owned()))
	}

	fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<Value, E> {
		Ok(Value::String(v))
	}

	fn visit_unit<E: de::Error>(self) -> std::result::Result<Value, E> {
		Ok(Value::Null)
	}

	fn visit_none<E: de::Error>(self) -> std::result::Result<Value, E> {
		Ok(Value::Null)
	}

	fn visit_some<D>(self, deserializer: D) -> std::result::Result<Value, D::Error>
	where
		D: Deserializer<'de>,
	{
		LastWinsValue::deserialize(deserializer).map(|LastWinsValue(value)| value)
	}

	fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Value, A::Error>
	where
		A: SeqAccess<'de>,
	{
		let mut items = Vec::new();
		while let Some(LastWinsValue(item)) = seq.next_element()? {
			items.push(item);
		}
		Ok(Value::Sequence(items))
	}

	fn visit_map<A>(self, mut map: A) -> std::result::Result<Value, A::Error>
	where
		A: MapAccess<'de>,
	{
		let mut mapping = Mapping::new();
		while let Some((LastWinsValue(key), LastWinsValue(value))) = map.next_entry()? {
			// Overwrites in place, so the key keeps its first position
			mapping.insert(key, value);
		}
		Ok(Value::Mapping(mapping))
	}

	fn visit_enum<A>(self, data: A) -> std::result::Result<Value, A::Error>
	where
		A: EnumAccess<'de>,
	{
		let (tag, variant) = data.variant::<String>()?;
		let LastWinsValue(value) = variant.newtype_variant()?;
		Ok(Value::Tagged(Box::new(TaggedValue {
			tag: Tag::new(tag),
			value,
		})))
	}
}
