//! Paginated catalog search against the remote lookup providers.
//!
//! Every provider call is scoped by the ambient company identifier the
//! authentication redirect left in session storage. Lookup failures never
//! escape this module: an unreachable provider or a non-success response
//! degrades to an empty page (or `None` for the league lookup) with a
//! console warning, and the picker simply shows no results.

use common::model::image::ImageAsset;
use common::model::league::League;
use common::model::player::Player;
use common::model::sponsor::Sponsor;
use common::model::team::Team;
use common::requests::SearchPage;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

const LOOKUP_BASE: &str = "/api/lookup";
const COMPANY_KEY: &str = "company_id";

pub async fn search_teams(query: &str, page: u32) -> SearchPage<Team> {
    search_catalog("teams", query, page).await
}

pub async fn search_players(query: &str, page: u32) -> SearchPage<Player> {
    search_catalog("players", query, page).await
}

pub async fn search_sponsors(query: &str, page: u32) -> SearchPage<Sponsor> {
    search_catalog("sponsors", query, page).await
}

pub async fn search_images(query: &str, page: u32) -> SearchPage<ImageAsset> {
    search_catalog("images", query, page).await
}

/// Secondary lookup behind the team expansion: resolves a league by name.
/// Missing leagues and provider failures both come back as `None`; the
/// expansion writes the league logo explicitly either way.
pub async fn fetch_league(league_name: &str) -> Option<League> {
    let url = format!("{LOOKUP_BASE}/leagues/{}", js_sys::encode_uri_component(league_name));
    let response = Request::get(&url)
        .query([("company", company_id().as_str())])
        .send()
        .await;

    match response {
        Ok(resp) if resp.status() == 200 => match resp.json::<League>().await {
            Ok(league) => Some(league),
            Err(err) => {
                gloo_console::warn!(format!("unreadable league record: {err}"));
                None
            }
        },
        Ok(resp) => {
            gloo_console::warn!(format!(
                "league lookup for '{league_name}' answered {}",
                resp.status()
            ));
            None
        }
        Err(err) => {
            gloo_console::warn!(format!("league lookup unreachable: {err}"));
            None
        }
    }
}

async fn search_catalog<T: DeserializeOwned>(catalog: &str, query: &str, page: u32) -> SearchPage<T> {
    let url = format!("{LOOKUP_BASE}/{catalog}");
    let response = Request::get(&url)
        .query([
            ("q", query),
            ("page", page.to_string().as_str()),
            ("company", company_id().as_str()),
        ])
        .send()
        .await;

    match response {
        Ok(resp) if resp.status() == 200 => match resp.json::<SearchPage<T>>().await {
            Ok(page) => page,
            Err(err) => {
                gloo_console::warn!(format!("unreadable {catalog} page: {err}"));
                SearchPage::empty()
            }
        },
        Ok(resp) => {
            gloo_console::warn!(format!("{catalog} search answered {}", resp.status()));
            SearchPage::empty()
        }
        Err(err) => {
            gloo_console::warn!(format!("{catalog} search unreachable: {err}"));
            SearchPage::empty()
        }
    }
}

fn company_id() -> String {
    web_sys::window()
        .and_then(|w| w.session_storage().ok().flatten())
        .and_then(|storage| storage.get_item(COMPANY_KEY).ok().flatten())
        .unwrap_or_default()
}
