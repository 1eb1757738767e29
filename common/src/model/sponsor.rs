use serde::{Deserialize, Serialize};

/// A sponsor record from the remote catalog. Unlike teams and players, the
/// sponsor catalog stores a reference URL, not a finally-hosted asset, so the
/// logo is re-uploaded through the upload collaborator before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sponsor {
    pub id: String,
    pub name: String,
    pub logo_url: String,
}
