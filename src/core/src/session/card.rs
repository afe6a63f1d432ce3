use crate::fixtures::{Fixture, TeamDirectory, VenueDirectory};
use crate::scoring::{score, Points, Prediction, Score};
use crate::share::{share_text, share_url};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One fixture as the user sees it while predicting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchCard {
    pub fixture_id: u32,
    pub home_team: String,
    pub away_team: String,
    pub kickoff_time: DateTime<Utc>,
    pub venue: String,
    pub home_crest: String,
    pub away_crest: String,
    pub prediction: Prediction,
    pub live_score: Score,
}

impl MatchCard {
    pub fn new(fixture: &Fixture, teams: &TeamDirectory) -> Self {
        let home_team = team_name(teams, fixture.team_h);
        let away_team = team_name(teams, fixture.team_a);

        MatchCard {
            fixture_id: fixture.id,
            venue: VenueDirectory::stadium(&home_team).to_string(),
            home_crest: VenueDirectory::crest(&home_team),
            away_crest: VenueDirectory::crest(&away_team),
            home_team,
            away_team,
            kickoff_time: fixture.kickoff_time,
            prediction: Prediction::default(),
            live_score: fixture.live_score(),
        }
    }

    pub fn points(&self) -> Points {
        score(&self.prediction, &self.live_score)
    }

    pub fn momentum_percent(&self) -> u8 {
        self.live_score.outcome().momentum_percent()
    }

    pub fn share_text(&self, matchweek: u32) -> String {
        share_text(
            &self.home_team,
            &self.away_team,
            self.prediction.home,
            self.prediction.away,
            matchweek,
        )
    }

    pub fn share_url(&self, matchweek: u32) -> String {
        share_url(&self.share_text(matchweek))
    }
}

fn team_name(teams: &TeamDirectory, id: u32) -> String {
    teams
        .name(id)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Team {}", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::Team;
    use crate::utils::DateUtils;

    fn teams() -> TeamDirectory {
        TeamDirectory::new(vec![
            Team { id: 1, name: "Arsenal".to_string() },
            Team { id: 6, name: "Chelsea".to_string() },
        ])
    }

    fn fixture(finished: bool) -> Fixture {
        Fixture {
            id: 250,
            event: Some(25),
            team_h: 1,
            team_a: 6,
            kickoff_time: DateUtils::parse_kickoff("2025-02-15T17:30:00Z").unwrap(),
            finished,
            team_h_score: Some(1),
            team_a_score: Some(1),
        }
    }

    #[test]
    fn test_new_resolves_names_and_venue() {
        let card = MatchCard::new(&fixture(true), &teams());

        assert_eq!(card.home_team, "Arsenal");
        assert_eq!(card.away_team, "Chelsea");
        assert_eq!(card.venue, "Emirates Stadium");
        assert_eq!(card.home_crest, "/static/crests/Arsenal.png");
        assert_eq!(card.live_score, Score::new(1, 1));
        assert_eq!(card.momentum_percent(), 50);
        assert_eq!(card.points(), Points::None);
    }

    #[test]
    fn test_unknown_team_falls_back() {
        let mut fixture = fixture(false);
        fixture.team_a = 99;

        let card = MatchCard::new(&fixture, &teams());

        assert_eq!(card.away_team, "Team 99");
        assert_eq!(card.live_score, Score::new(0, 0));
    }

    #[test]
    fn test_points_follow_prediction() {
        let mut card = MatchCard::new(&fixture(true), &teams());

        card.prediction = Prediction::exact(1, 1);
        assert_eq!(card.points(), Points::ExactScore);

        card.prediction = Prediction::exact(2, 2);
        assert_eq!(card.points(), Points::CorrectResult);

        card.prediction = Prediction::exact(2, 0);
        assert_eq!(card.points(), Points::None);
    }

    #[test]
    fn test_share_text() {
        let mut card = MatchCard::new(&fixture(true), &teams());
        card.prediction = Prediction::new(Some(3), None);

        assert_eq!(
            card.share_text(25),
            "I predicted Arsenal 3 - X Chelsea for Matchday 25! #DegenPicks"
        );
        assert!(card.share_url(25).starts_with("https://twitter.com/intent/tweet?text=I%20predicted%20Arsenal%203%20-%20X"));
    }
}
