//! Cloud account entry from the config file.

use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Twelve digit AWS account id.
    pub id: String,
    /// Friendly name, also the AWS CLI profile and the cache directory name.
    pub name: String,
}

impl Account {
    pub fn new(id: &str, name: &str) -> Self {
        Account {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    /// True if `wanted` names this account by name or id.
    pub fn matches(&self, wanted: &str) -> bool {
        self.name == wanted || self.id == wanted
    }
}
