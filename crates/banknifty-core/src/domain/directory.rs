use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{CoreError, Symbol, ValidationError};

const BANK_NIFTY: [(&str, &str); 12] = [
    ("HDFC Bank", "HDFCBANK.NS"),
    ("ICICI Bank", "ICICIBANK.NS"),
    ("Axis Bank", "AXISBANK.NS"),
    ("Kotak Mahindra Bank", "KOTAKBANK.NS"),
    ("State Bank of India", "SBIN.NS"),
    ("IndusInd Bank", "INDUSINDBK.NS"),
    ("Bank of Baroda", "BANKBARODA.NS"),
    ("Punjab National Bank", "PNB.NS"),
    ("Canara Bank", "CANBK.NS"),
    ("Federal Bank", "FEDERALBNK.NS"),
    ("IDFC First Bank", "IDFCFIRSTB.NS"),
    ("AU Small Finance Bank", "AUBANK.NS"),
];

/// One company in the ticker directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub company: String,
    pub symbol: Symbol,
}

/// Ordered mapping from company display name to exchange ticker.
///
/// Iteration order is insertion order and drives the row order of every
/// table built from it. Company names are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TickerDirectory {
    entries: Vec<DirectoryEntry>,
}

impl TickerDirectory {
    pub fn from_entries(entries: Vec<DirectoryEntry>) -> Result<Self, ValidationError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if entry.company.trim().is_empty() {
                return Err(ValidationError::EmptyCompanyName);
            }
            if !seen.insert(entry.company.as_str()) {
                return Err(ValidationError::DuplicateCompany {
                    name: entry.company.clone(),
                });
            }
        }

        Ok(Self { entries })
    }

    /// Build from `(company, ticker)` pairs.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let entries = pairs
            .into_iter()
            .map(|(company, symbol)| {
                Ok(DirectoryEntry {
                    company: company.to_owned(),
                    symbol: Symbol::parse(symbol)?,
                })
            })
            .collect::<Result<Vec<_>, ValidationError>>()?;

        Self::from_entries(entries)
    }

    /// The twelve Bank Nifty constituents.
    pub fn bank_nifty() -> Self {
        let entries = BANK_NIFTY
            .iter()
            .filter_map(|(company, symbol)| {
                Some(DirectoryEntry {
                    company: (*company).to_owned(),
                    symbol: Symbol::parse(symbol).ok()?,
                })
            })
            .collect();
        Self { entries }
    }

    /// Parse a JSON array of `{"company": .., "symbol": ..}` objects.
    pub fn from_json_str(input: &str) -> Result<Self, CoreError> {
        let entries: Vec<DirectoryEntry> = serde_json::from_str(input)?;
        Ok(Self::from_entries(entries)?)
    }

    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CoreError::DirectoryFile {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Keep only the selected companies, preserving directory order.
    ///
    /// Names that are not in the directory are ignored.
    pub fn restrict(&self, selection: &BTreeSet<String>) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|entry| selection.contains(&entry.company))
                .cloned()
                .collect(),
        }
    }

    /// Reject selections naming companies the directory does not know.
    pub fn validate_selection<'a, I>(&self, names: I) -> Result<(), ValidationError>
    where
        I: IntoIterator<Item = &'a String>,
    {
        for name in names {
            if self.symbol_for(name).is_none() {
                return Err(ValidationError::UnknownCompany { name: name.clone() });
            }
        }
        Ok(())
    }

    pub fn symbol_for(&self, company: &str) -> Option<&Symbol> {
        self.entries
            .iter()
            .find(|entry| entry.company == company)
            .map(|entry| &entry.symbol)
    }

    pub fn companies(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.company.as_str())
    }

    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TickerDirectory {
    fn default() -> Self {
        Self::bank_nifty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bank_nifty_keeps_declared_order() {
        let directory = TickerDirectory::bank_nifty();
        assert_eq!(directory.len(), 12);
        let companies = directory.companies().collect::<Vec<_>>();
        assert_eq!(companies.first(), Some(&"HDFC Bank"));
        assert_eq!(companies.last(), Some(&"AU Small Finance Bank"));
        assert_eq!(
            directory.symbol_for("State Bank of India").map(Symbol::as_str),
            Some("SBIN.NS")
        );
    }

    #[test]
    fn rejects_duplicate_company_names() {
        let err =
            TickerDirectory::from_pairs([("Axis Bank", "AXISBANK.NS"), ("Axis Bank", "AXIS.NS")])
                .expect_err("duplicate must fail");
        assert_eq!(
            err,
            ValidationError::DuplicateCompany {
                name: String::from("Axis Bank")
            }
        );
    }

    #[test]
    fn restrict_preserves_directory_order_and_skips_unknown() {
        let directory = TickerDirectory::bank_nifty();
        let selection = ["Canara Bank", "HDFC Bank", "Nonexistent Bank"]
            .into_iter()
            .map(String::from)
            .collect::<BTreeSet<_>>();

        let restricted = directory.restrict(&selection);
        let companies = restricted.companies().collect::<Vec<_>>();
        assert_eq!(companies, vec!["HDFC Bank", "Canara Bank"]);
    }

    #[test]
    fn validate_selection_names_the_unknown_company() {
        let directory = TickerDirectory::bank_nifty();
        let names = vec![String::from("HDFC Bank"), String::from("Yes Bank")];
        let err = directory
            .validate_selection(&names)
            .expect_err("unknown company must fail");
        assert!(matches!(err, ValidationError::UnknownCompany { name } if name == "Yes Bank"));
    }

    #[test]
    fn parses_json_directory_in_file_order() {
        let directory = TickerDirectory::from_json_str(
            r#"[{"company":"Zeta Bank","symbol":"zeta.ns"},{"company":"Alpha Bank","symbol":"ALPHA.NS"}]"#,
        )
        .expect("directory should parse");

        let companies = directory.companies().collect::<Vec<_>>();
        assert_eq!(companies, vec!["Zeta Bank", "Alpha Bank"]);
        assert_eq!(
            directory.symbol_for("Zeta Bank").map(Symbol::as_str),
            Some("ZETA.NS")
        );
    }

    #[test]
    fn json_directory_with_bad_symbol_is_rejected() {
        let err = TickerDirectory::from_json_str(r#"[{"company":"Bad","symbol":"9BAD"}]"#)
            .expect_err("bad symbol must fail");
        assert!(matches!(err, CoreError::Serialization(_)));
    }

    #[test]
    fn loads_directory_from_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("tickers.json");
        std::fs::write(&path, r#"[{"company":"Yes Bank","symbol":"YESBANK.NS"}]"#)
            .expect("fixture written");

        let directory = TickerDirectory::from_json_path(&path).expect("file should load");
        assert_eq!(directory.len(), 1);

        let missing = TickerDirectory::from_json_path(dir.path().join("missing.json"))
            .expect_err("missing file must fail");
        assert!(matches!(missing, CoreError::DirectoryFile { .. }));
    }
}
