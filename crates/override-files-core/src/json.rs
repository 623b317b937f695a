//! JSON operations using sonic-rs.

use crate::{Error, Result};
use serde::{Serialize, de::DeserializeOwned};

/// Deserialize JSON string.
///
/// # Errors
/// Returns error if JSON is invalid.
pub fn from_json<T: DeserializeOwned>(s: &str) -> Result<T> {
    sonic_rs::from_str(s).map_err(Error::from)
}

/// Serialize to compact JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    sonic_rs::to_string(value).map_err(Error::from)
}

/// Serialize to pretty JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<String> {
    sonic_rs::to_string_pretty(value).map_err(Error::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::collections::BTreeMap;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Autoload {
        #[serde(rename = "psr-4", default)]
        psr4: BTreeMap<String, String>,
        #[serde(default)]
        files: Vec<String>,
    }

    #[test]
    fn parses_kebab_case_keys() {
        let parsed: Autoload =
            from_json(r#"{"psr-4": {"Acme\\": "overrides/Acme"}, "files": ["a.php"]}"#).unwrap();
        assert_eq!(parsed.psr4.get("Acme\\").map(String::as_str), Some("overrides/Acme"));
        assert_eq!(parsed.files, vec!["a.php"]);
    }

    #[test]
    fn invalid_json_is_an_error() {
        let result: Result<Autoload> = from_json("{not json");
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn compact_output_round_trips() {
        let value = Autoload {
            psr4: BTreeMap::from([("Acme\\".to_string(), "overrides/Acme".to_string())]),
            files: vec![],
        };
        let json = to_json(&value).unwrap();
        assert_eq!(from_json::<Autoload>(&json).unwrap(), value);
        assert!(to_json_pretty(&value).unwrap().contains('\n'));
    }
}
