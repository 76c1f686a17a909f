//! Reader for share files.
//!
//! A share file is a JSON object whose `keys` entry gives the threshold `k`
//! (and, optionally, the number of shares `n`), and whose every other entry
//! maps a share index to the base and numeral of its fragment:
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" }
//! }
//! ```

use crate::{Error, RawShare, Result};
use serde::Deserialize;
use serde_json::{Map, Value};

/// The content of a share file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareFile {
    /// Number of shares needed to reconstruct.
    pub threshold: usize,
    /// Number of shares announced by the file, if any.
    pub declared_total: Option<usize>,
    /// Shares, by increasing index.
    pub shares: Vec<RawShare>,
}

#[derive(Deserialize)]
struct Keys {
    k: usize,
    n: Option<usize>,
}

#[derive(Deserialize)]
struct Entry {
    base: Base,
    value: String,
}

/// Bases are written as strings in share files, but plain numbers are accepted.
#[derive(Deserialize)]
#[serde(untagged)]
enum Base {
    Number(u32),
    Text(String),
}

impl ShareFile {
    /// Parse a share file from its JSON content.
    pub fn from_json(content: &str) -> Result<Self> {
        let mut object: Map<String, Value> =
            serde_json::from_str(content).map_err(|e| Error::invalid_input(e.to_string()))?;

        let keys = object
            .remove("keys")
            .ok_or_else(|| Error::invalid_input("missing \"keys\" entry"))?;
        let keys: Keys = serde_json::from_value(keys)
            .map_err(|e| Error::invalid_input(format!("\"keys\": {}", e)))?;

        let mut shares = object
            .into_iter()
            .map(|(key, value)| Self::parse_share(&key, value))
            .collect::<Result<Vec<_>>>()?;
        shares.sort_by_key(|share| share.x);

        Ok(Self {
            threshold: keys.k,
            declared_total: keys.n,
            shares,
        })
    }

    fn parse_share(key: &str, value: Value) -> Result<RawShare> {
        let x = key
            .trim()
            .parse::<u64>()
            .map_err(|_| Error::invalid_share(key, "index is not a non-negative integer"))?;
        let entry: Entry =
            serde_json::from_value(value).map_err(|e| Error::invalid_share(key, e.to_string()))?;
        let base = match entry.base {
            Base::Number(base) => base,
            Base::Text(text) => text
                .trim()
                .parse::<u32>()
                .map_err(|_| Error::invalid_share(key, format!("invalid base {:?}", text)))?,
        };
        Ok(RawShare::new(x, base, entry.value))
    }
}

#[cfg(test)]
mod tests {
    use super::ShareFile;
    use crate::{Error, RawShare};

    const SAMPLE: &str = r#"{
        "keys": { "n": 4, "k": 3 },
        "1": { "base": "10", "value": "4" },
        "2": { "base": "2", "value": "111" },
        "3": { "base": "10", "value": "12" },
        "6": { "base": "4", "value": "213" }
    }"#;

    #[test]
    fn sample_file() -> Result<(), Box<dyn std::error::Error>> {
        let file = ShareFile::from_json(SAMPLE)?;
        assert_eq!(file.threshold, 3);
        assert_eq!(file.declared_total, Some(4));
        assert_eq!(
            file.shares,
            vec![
                RawShare::new(1, 10, "4"),
                RawShare::new(2, 2, "111"),
                RawShare::new(3, 10, "12"),
                RawShare::new(6, 4, "213"),
            ]
        );
        Ok(())
    }

    #[test]
    fn ordered_by_index() -> Result<(), Box<dyn std::error::Error>> {
        let file = ShareFile::from_json(
            r#"{"keys": {"k": 1}, "10": {"base": 16, "value": "a"}, "2": {"base": "16", "value": "a"}}"#,
        )?;
        assert_eq!(file.declared_total, None);
        assert_eq!(
            file.shares.iter().map(|share| share.x).collect::<Vec<_>>(),
            vec![2, 10]
        );
        Ok(())
    }

    #[test]
    fn malformed_files() {
        let cases = [
            "not json",
            "[1, 2]",
            r#"{"1": {"base": "10", "value": "4"}}"#,
            r#"{"keys": {"n": 2}}"#,
            r#"{"keys": {"k": 1}, "one": {"base": "10", "value": "4"}}"#,
            r#"{"keys": {"k": 1}, "-1": {"base": "10", "value": "4"}}"#,
            r#"{"keys": {"k": 1}, "1": {"base": "ten", "value": "4"}}"#,
            r#"{"keys": {"k": 1}, "1": {"base": "10"}}"#,
            r#"{"keys": {"k": 1}, "1": {"base": "10", "value": 4}}"#,
        ];
        for case in cases {
            let error = ShareFile::from_json(case).unwrap_err();
            assert!(matches!(error, Error::InvalidInput(_)), "{}", case);
        }
    }
}
