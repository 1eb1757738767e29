use serde::{Deserialize, Serialize};

/// A league record, looked up by name when a team selection expands into its
/// league fields. The logo may be missing for smaller leagues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct League {
    pub name: String,
    pub logo_url: Option<String>,
}
