use serde::{Deserialize, Serialize};

/// A player record from the remote catalog.
///
/// `position_and_number` is the pre-formatted label shown on the template
/// (e.g. "GK 1"); `player_image` is the hosted portrait asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    pub position_and_number: String,
    pub player_image: String,
}
