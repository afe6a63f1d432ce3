use crate::utils::DateUtils;
use chrono::NaiveDate;
use serde::Serialize;

/// Date span of one matchweek, derived from its fixtures' kickoffs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchweekSummary {
    pub event: u32,
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl MatchweekSummary {
    pub fn new(event: u32, from: NaiveDate, to: NaiveDate) -> Self {
        debug_assert!(from <= to, "matchweek {} spans backwards", event);

        MatchweekSummary { event, from, to }
    }

    /// Still open on `today`: its last fixture is today or later.
    pub fn is_open_on(&self, today: NaiveDate) -> bool {
        today <= self.to
    }

    pub fn label(&self) -> String {
        format!(
            "Matchday {} ({} to {})",
            self.event,
            DateUtils::format_date(self.from),
            DateUtils::format_date(self.to)
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchweekSelection {
    pub summaries: Vec<MatchweekSummary>,
    pub current: Option<u32>,
}

impl MatchweekSelection {
    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }

    pub fn first(&self) -> Option<&MatchweekSummary> {
        self.summaries.first()
    }

    pub fn get(&self, event: u32) -> Option<&MatchweekSummary> {
        self.summaries.iter().find(|summary| summary.event == event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_label() {
        let summary = MatchweekSummary::new(25, date(2025, 2, 14), date(2025, 2, 16));

        assert_eq!(summary.label(), "Matchday 25 (2025-02-14 to 2025-02-16)");
    }

    #[test]
    fn test_is_open_on() {
        let summary = MatchweekSummary::new(1, date(2025, 2, 1), date(2025, 2, 2));

        assert!(summary.is_open_on(date(2025, 1, 20)));
        assert!(summary.is_open_on(date(2025, 2, 2)));
        assert!(!summary.is_open_on(date(2025, 2, 3)));
    }

    #[test]
    fn test_serializes_dates_as_calendar_days() {
        let summary = MatchweekSummary::new(2, date(2025, 2, 8), date(2025, 2, 8));

        assert_eq!(
            serde_json::to_value(summary).unwrap(),
            serde_json::json!({"event": 2, "from": "2025-02-08", "to": "2025-02-08"})
        );
    }
}
