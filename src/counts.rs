use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Sparse mapping from normalized `YYYY-MM-DD` keys to activity counts.
/// Owned by the caller side of the program; the grid only reads it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct CountMap(BTreeMap<String, u64>);

impl CountMap {
    pub(crate) fn load(path: &Path) -> Result<CountMap, CountsError> {
        let text = fs::read_to_string(path)?;
        CountMap::from_json(&text)
    }

    pub(crate) fn from_json(text: &str) -> Result<CountMap, CountsError> {
        let raw = serde_json::from_str::<BTreeMap<String, i64>>(text)?;
        Ok(raw.into_iter().collect())
    }

    /// Absent keys read as zero.
    pub(crate) fn get(&self, key: &str) -> u64 {
        self.0.get(key).copied().unwrap_or(0)
    }
}

// Negative counts are out of contract; clamp them to zero on the way in
// rather than letting them reach the classifier.
impl FromIterator<(String, i64)> for CountMap {
    fn from_iter<I: IntoIterator<Item = (String, i64)>>(iter: I) -> CountMap {
        CountMap(
            iter.into_iter()
                .map(|(key, count)| (key, u64::try_from(count).unwrap_or(0)))
                .collect(),
        )
    }
}

#[derive(Debug, Error)]
pub(crate) enum CountsError {
    #[error("failed to read counts file")]
    Read(#[from] io::Error),
    #[error("counts file is not a JSON object of date keys to numbers")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let counts = CountMap::from_json(r#"{"2021-01-01": 10, "2021-01-15": 3}"#).unwrap();
        assert_eq!(counts.get("2021-01-01"), 10);
        assert_eq!(counts.get("2021-01-15"), 3);
    }

    #[test]
    fn test_absent_key_reads_zero() {
        let counts = CountMap::from_json("{}").unwrap();
        assert_eq!(counts.get("2021-01-01"), 0);
    }

    #[test]
    fn test_negative_counts_clamp_to_zero() {
        let counts = CountMap::from_json(r#"{"2021-01-01": -5, "2021-01-02": 2}"#).unwrap();
        assert_eq!(counts.get("2021-01-01"), 0);
        assert_eq!(counts.get("2021-01-02"), 2);
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(CountMap::from_json("[1, 2, 3]").is_err());
        assert!(CountMap::from_json(r#"{"2021-01-01": "ten"}"#).is_err());
        assert!(CountMap::from_json("not json").is_err());
    }
}
