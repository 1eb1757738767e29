//! Derived-field expansion: one catalog selection, many property writes.
//!
//! Each entity expands into a fixed, entity-specific selector list matching
//! the slot vocabulary of the templates. The lists built here are pure data;
//! the asynchronous parts of an expansion (league lookup, sponsor logo
//! re-hosting) happen in the editor before the list is built, so the whole
//! expansion travels through the fan-out as one ordered edit list.

use common::model::player::Player;
use common::model::team::Team;

use crate::preview::bindings::FieldRole;

/// Which side of a matchup a team binding addresses. Derived from the
/// triggering binding, never from the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamSide {
    Left,
    Right,
}

impl TeamSide {
    pub fn from_role(role: &FieldRole) -> Option<Self> {
        match role {
            FieldRole::TeamLogoLeft => Some(TeamSide::Left),
            FieldRole::TeamLogoRight => Some(TeamSide::Right),
            _ => None,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            TeamSide::Left => "Left",
            TeamSide::Right => "Right",
        }
    }
}

/// Picking a team writes its logo and name on the triggering side plus the
/// shared league fields. The league logo pair is always present: when the
/// league lookup yields nothing the value is empty, which clears any stale
/// override instead of leaving the previous league's logo standing.
pub fn team_edits(side: TeamSide, team: &Team, league_logo: Option<&str>) -> Vec<(String, String)> {
    vec![
        (format!("teamLogo{}", side.suffix()), team.logo_url.clone()),
        (format!("teamName{}", side.suffix()), team.name.clone()),
        ("leagueName".to_string(), team.league_name.clone()),
        (
            "leagueLogo".to_string(),
            league_logo.unwrap_or_default().to_string(),
        ),
    ]
}

/// Picking a player fills the whole player block of the triggering slot:
/// portrait, position/number label, full name, and the split name parts.
pub fn player_edits(slot: u32, player: &Player) -> Vec<(String, String)> {
    let (first_name, last_name) = split_full_name(&player.name);
    vec![
        (format!("playerImage{slot}"), player.player_image.clone()),
        (format!("playerNumber{slot}"), player.position_and_number.clone()),
        (format!("playername{slot}"), player.name.clone()),
        (format!("playerfirstname{slot}"), first_name),
        (format!("playerlastname{slot}"), last_name),
    ]
}

/// Picking a sponsor writes the logo only; by the time this list is built
/// the asset has already been re-hosted through the upload collaborator.
pub fn sponsor_edits(hosted_logo_url: &str) -> Vec<(String, String)> {
    vec![("Sponsor Logo".to_string(), hosted_logo_url.to_string())]
}

/// First whitespace token as the first name, the remainder as the last name.
/// Single-token names leave the last name empty.
fn split_full_name(name: &str) -> (String, String) {
    let mut parts = name.split_whitespace();
    let first = parts.next().unwrap_or_default().to_string();
    let rest = parts.collect::<Vec<_>>().join(" ");
    (first, rest)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn team() -> Team {
        Team {
            id: "t1".into(),
            name: "FC Example".into(),
            league_name: "Premier League".into(),
            logo_url: "https://cdn.example/fc.png".into(),
        }
    }

    #[test]
    fn team_expansion_is_complete_even_without_a_league_logo() {
        let edits = team_edits(TeamSide::Left, &team(), None);
        assert_eq!(
            edits,
            vec![
                ("teamLogoLeft".to_string(), "https://cdn.example/fc.png".to_string()),
                ("teamNameLeft".to_string(), "FC Example".to_string()),
                ("leagueName".to_string(), "Premier League".to_string()),
                // Written explicitly as empty, not omitted.
                ("leagueLogo".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn team_expansion_targets_the_triggering_side() {
        let edits = team_edits(
            TeamSide::Right,
            &team(),
            Some("https://cdn.example/league.png"),
        );
        assert_eq!(edits[0].0, "teamLogoRight");
        assert_eq!(edits[1].0, "teamNameRight");
        assert_eq!(edits[3].1, "https://cdn.example/league.png");
    }

    #[test]
    fn side_comes_from_the_binding_role() {
        assert_eq!(
            TeamSide::from_role(&FieldRole::TeamLogoLeft),
            Some(TeamSide::Left)
        );
        assert_eq!(
            TeamSide::from_role(&FieldRole::TeamLogoRight),
            Some(TeamSide::Right)
        );
        assert_eq!(TeamSide::from_role(&FieldRole::PlainText), None);
    }

    #[test]
    fn player_expansion_fills_the_whole_slot_block() {
        let player = Player {
            id: "p1".into(),
            name: "Jane Doe".into(),
            position_and_number: "GK 1".into(),
            player_image: "u1".into(),
        };
        assert_eq!(
            player_edits(7, &player),
            vec![
                ("playerImage7".to_string(), "u1".to_string()),
                ("playerNumber7".to_string(), "GK 1".to_string()),
                ("playername7".to_string(), "Jane Doe".to_string()),
                ("playerfirstname7".to_string(), "Jane".to_string()),
                ("playerlastname7".to_string(), "Doe".to_string()),
            ]
        );
    }

    #[test]
    fn name_splitting_handles_short_and_long_names() {
        assert_eq!(split_full_name("Jane"), ("Jane".to_string(), String::new()));
        assert_eq!(
            split_full_name("Jan van der Berg"),
            ("Jan".to_string(), "van der Berg".to_string())
        );
        assert_eq!(split_full_name(""), (String::new(), String::new()));
    }

    #[test]
    fn sponsor_expansion_is_the_logo_write_only() {
        assert_eq!(
            sponsor_edits("https://cdn.example/acme.png"),
            vec![("Sponsor Logo".to_string(), "https://cdn.example/acme.png".to_string())]
        );
    }
}
