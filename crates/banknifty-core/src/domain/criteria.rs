use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::TickerDirectory;

/// Display filters chosen by the host for one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub selected_companies: BTreeSet<String>,
    pub min_roe: f64,
    pub max_pe: f64,
}

impl FilterCriteria {
    pub fn new<I, S>(companies: I, min_roe: f64, max_pe: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selected_companies: companies.into_iter().map(Into::into).collect(),
            min_roe,
            max_pe,
        }
    }

    /// Every company in `directory` selected.
    pub fn all(directory: &TickerDirectory, min_roe: f64, max_pe: f64) -> Self {
        Self::new(directory.companies(), min_roe, max_pe)
    }

    pub fn is_selected(&self, company: &str) -> bool {
        self.selected_companies.contains(company)
    }
}
