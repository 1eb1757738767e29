use serde::{Deserialize, Serialize};

/// A team record from the remote catalog. `logo_url` points at the hosted
/// logo asset; `league_name` keys the secondary league lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    pub league_name: String,
    pub logo_url: String,
}
