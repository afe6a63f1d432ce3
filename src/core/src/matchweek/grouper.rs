use crate::fixtures::Fixture;
use crate::matchweek::{MatchweekSelection, MatchweekSummary};
use crate::utils::DateUtils;
use chrono::{DateTime, Utc};
use itertools::{Itertools, MinMaxResult};
use log::debug;
use serde_json::Value;

/// Buckets fixtures into matchweeks and picks the one to play next.
///
/// Unscheduled fixtures are ignored, matchweeks whose last kickoff date is
/// before `now`'s date are dropped, and the rest come back ordered by id.
pub fn group_and_select(fixtures: &[Fixture], now: DateTime<Utc>) -> MatchweekSelection {
    let today = DateUtils::utc_date(now);

    let summaries: Vec<MatchweekSummary> = fixtures
        .iter()
        .filter_map(|fixture| fixture.matchweek().map(|event| (event, fixture.kickoff_time)))
        .into_group_map()
        .into_iter()
        .filter_map(|(event, kickoffs)| summarize(event, &kickoffs))
        .filter(|summary| summary.is_open_on(today))
        .sorted_by_key(|summary| summary.event)
        .collect();

    let current = summaries
        .iter()
        .find(|summary| summary.is_open_on(today))
        .or_else(|| summaries.first())
        .map(|summary| summary.event);

    debug!(
        "grouped {} fixtures into {} open matchweeks, current {:?}",
        fixtures.len(),
        summaries.len(),
        current
    );

    MatchweekSelection { summaries, current }
}

/// Same as [`group_and_select`] over a raw upstream payload; anything
/// unreadable degrades to an empty selection.
pub fn group_and_select_value(value: &Value, now: DateTime<Utc>) -> MatchweekSelection {
    group_and_select(&Fixture::parse_list(value), now)
}

pub fn fixtures_for(fixtures: &[Fixture], event: u32) -> Vec<&Fixture> {
    fixtures
        .iter()
        .filter(|fixture| fixture.matchweek() == Some(event))
        .collect()
}

fn summarize(event: u32, kickoffs: &[DateTime<Utc>]) -> Option<MatchweekSummary> {
    let (first, last) = match kickoffs.iter().minmax() {
        MinMaxResult::NoElements => return None,
        MinMaxResult::OneElement(kickoff) => (kickoff, kickoff),
        MinMaxResult::MinMax(first, last) => (first, last),
    };

    Some(MatchweekSummary::new(
        event,
        DateUtils::utc_date(*first),
        DateUtils::utc_date(*last),
    ))
}
