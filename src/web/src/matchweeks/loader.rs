use crate::{ApiResult, PicksAppData};
use chrono::Utc;
use log::info;
use picks_core::{group_and_select, PredictionSession, SessionAction};

/// Loads teams and fixtures, groups them into matchweeks and, when `event`
/// names a matchweek other than the default one, fetches that one's fixtures.
pub async fn load_session(state: &PicksAppData, event: Option<u32>) -> ApiResult<PredictionSession> {
    let teams = state.fpl.teams().await?;
    let fixtures = state.fpl.fixtures(None).await?;

    let selection = group_and_select(&fixtures, Utc::now());

    info!(
        "loaded {} teams, {} fixtures, {} open matchweeks",
        teams.len(),
        fixtures.len(),
        selection.summaries.len()
    );

    let mut session = PredictionSession::new(teams);
    session.apply(SessionAction::MatchweeksLoaded { selection, fixtures });

    let Some(event) = event.filter(|event| session.selected() != Some(*event)) else {
        return Ok(session);
    };

    if let Some(ticket) = session.apply(SessionAction::SelectMatchweek { event }) {
        let action = match state.fpl.fixtures(Some(ticket.event)).await {
            Ok(fixtures) => SessionAction::FixturesLoaded { ticket, fixtures },
            Err(_) => SessionAction::FixturesFailed { ticket },
        };

        session.apply(action);
    }

    Ok(session)
}
