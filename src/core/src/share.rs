use crate::utils::UriUtils;

const TWEET_INTENT_URL: &str = "https://twitter.com/intent/tweet";
const HASHTAG: &str = "#DegenPicks";
const UNSET_PICK: &str = "X";

pub fn share_text(
    home_team: &str,
    away_team: &str,
    home: Option<u8>,
    away: Option<u8>,
    matchweek: u32,
) -> String {
    format!(
        "I predicted {} {} - {} {} for Matchday {}! {}",
        home_team,
        pick_label(home),
        pick_label(away),
        away_team,
        matchweek,
        HASHTAG
    )
}

/// Tweet intent link carrying `text` as its prefilled message.
pub fn share_url(text: &str) -> String {
    format!("{}?text={}", TWEET_INTENT_URL, UriUtils::encode_component(text))
}

fn pick_label(pick: Option<u8>) -> String {
    pick.map(|goals| goals.to_string())
        .unwrap_or_else(|| UNSET_PICK.to_string())
}
