//! Group file import
//!
//! A group file lists participants by name and expenses that refer to
//! them by name. It is replayed through a [`Ledger`], so every expense goes
//! through the same validation as an interactive edit.
//!
//! ```yaml
//! participants: [Alice, Bob, Carol]
//! expenses:
//!   - description: Dinner
//!     amount: 90
//!     paid_by: Alice
//!     shared_by: [Alice, Bob, Carol]
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ledger::Ledger;
use crate::error::{SplitterError, SplitterResult};
use crate::models::{ExpenseDraft, Money, PersonId, SettlementPolicy};

/// One expense as written in a group file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupExpense {
    pub description: String,
    pub amount: Money,
    pub paid_by: String,
    pub shared_by: Vec<String>,
}

/// Participants and expenses read from JSON or YAML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupFile {
    /// Optional label shown in reports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub participants: Vec<String>,

    #[serde(default)]
    pub expenses: Vec<GroupExpense>,
}

/// Serialization format of a group file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupFormat {
    Json,
    Yaml,
}

impl GroupFormat {
    /// Guess the format from a file extension; anything but `.yaml`/`.yml` is JSON
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

impl GroupFile {
    /// Parse group file contents
    pub fn parse(contents: &str, format: GroupFormat) -> SplitterResult<Self> {
        let group = match format {
            GroupFormat::Json => serde_json::from_str(contents)?,
            GroupFormat::Yaml => serde_yaml::from_str(contents)?,
        };
        Ok(group)
    }

    /// Read and parse a group file, picking the format from its extension
    pub fn load(path: &Path) -> SplitterResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            SplitterError::Io(format!("Failed to read group file {}: {}", path.display(), e))
        })?;
        Self::parse(&contents, GroupFormat::from_path(path))
    }

    /// Replay the file into a fresh ledger
    ///
    /// Names are the only handle in a group file, so they must be unique
    /// after trimming.
    pub fn build_ledger(&self, policy: SettlementPolicy) -> SplitterResult<Ledger> {
        let mut ledger = Ledger::with_policy(policy);
        let mut by_name: HashMap<String, PersonId> = HashMap::new();

        for name in &self.participants {
            let person = ledger.add_participant(name)?;
            if by_name.insert(person.name.clone(), person.id).is_some() {
                return Err(SplitterError::Duplicate {
                    entity_type: "Participant",
                    identifier: person.name,
                });
            }
        }

        let resolve = |name: &str, line: usize| {
            by_name.get(name.trim()).copied().ok_or_else(|| {
                SplitterError::Import(format!(
                    "expense #{}: unknown participant '{}'",
                    line,
                    name.trim()
                ))
            })
        };

        for (index, entry) in self.expenses.iter().enumerate() {
            let line = index + 1;
            let payer = resolve(&entry.paid_by, line)?;
            let sharers = entry
                .shared_by
                .iter()
                .map(|name| resolve(name, line))
                .collect::<SplitterResult<Vec<_>>>()?;

            let draft = ExpenseDraft::new(entry.description.clone(), entry.amount, payer, sharers);
            ledger
                .upsert_expense(draft, None)
                .map_err(|e| SplitterError::Import(format!("expense #{}: {}", line, e)))?;
        }

        tracing::debug!(
            participants = ledger.participants().len(),
            expenses = ledger.expenses().len(),
            "group file loaded"
        );

        Ok(ledger)
    }
}
