//! Campaign records and the editable draft they are created from.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use web_time::{SystemTime, UNIX_EPOCH};

/// Image shown for campaigns created without a cover image.
pub const PLACEHOLDER_IMAGE: &str = "/api/placeholder/400/200";

/// A single funding campaign as displayed on the landing page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    /// Creation timestamp in milliseconds. Unique and monotonically
    /// increasing across creations.
    pub id: u64,
    /// The campaign owner's display name.
    pub name: String,
    /// Business or project title.
    pub business: String,
    pub story: String,
    /// Funding goal, in rupees.
    pub goal: f64,
    /// Total raised so far. Only a donation may increase it.
    pub raised: f64,
    /// Number of donations received. Only a donation may increase it.
    pub supporters: u32,
    /// Whole days until the deadline. Goes negative once the deadline has
    /// passed; not clamped.
    pub days_left: i64,
    /// Cover image URL.
    pub image: String,
    /// Free-text labels, order preserved, duplicates allowed.
    pub tags: Vec<String>,
}

impl Campaign {
    /// Fraction of the goal raised. Not clamped to `[0, 1]`; an over-funded
    /// campaign reports a fraction above one.
    pub fn progress(&self) -> f64 {
        self.raised / self.goal
    }
}

/// Editable form state for the create-campaign modal.
///
/// One named field per input, cleared in full after submit or cancel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CampaignDraft {
    pub name: String,
    pub business: String,
    pub story: String,
    /// Funding goal as typed, parsed on submit.
    pub goal: String,
    /// Deadline as typed by a date input, `YYYY-MM-DD`.
    pub deadline: String,
    /// Comma-separated tag list.
    pub tags: String,
    /// Reference to a picked cover image, if any.
    pub image: Option<String>,
}

impl CampaignDraft {
    /// All six text fields filled in.
    pub fn has_all_fields(&self) -> bool {
        [
            &self.name,
            &self.business,
            &self.story,
            &self.goal,
            &self.deadline,
            &self.tags,
        ]
        .iter()
        .all(|field| !field.trim().is_empty())
    }

    /// Submittable: every field present, the goal parses to a positive
    /// number and the deadline is a valid date.
    pub fn is_complete(&self) -> bool {
        self.has_all_fields()
            && matches!(self.goal.trim().parse::<f64>(), Ok(goal) if goal > 0.0)
            && parse_deadline(&self.deadline).is_some()
    }
}

/// Splits a comma-separated tag field into trimmed tags, dropping empty
/// segments. Order and duplicates are preserved.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses a `YYYY-MM-DD` date input value into its midnight instant.
pub fn parse_deadline(input: &str) -> Option<NaiveDateTime> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// Whole days from `now` until `deadline`, rounded up. Negative once the
/// deadline lies in the past.
pub fn days_until(deadline: NaiveDateTime, now: NaiveDateTime) -> i64 {
    // Equivalent to `i64::div_ceil(seconds, 86_400)`, written out because that
    // method is still unstable (`int_roundings`) on stable toolchains. The
    // divisor is always positive, so round toward +infinity when there is a
    // positive remainder.
    let seconds = (deadline - now).num_seconds();
    let quotient = seconds / 86_400;
    if seconds % 86_400 > 0 {
        quotient + 1
    } else {
        quotient
    }
}

/// Millisecond unix timestamp, used as a campaign id.
pub fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};

    fn noon(date: NaiveDate) -> NaiveDateTime {
        date.and_hms_opt(12, 0, 0).unwrap()
    }

    #[test]
    fn tags_are_trimmed_in_order() {
        assert_eq!(
            parse_tags("Handicrafts, Traditional,  Artisan"),
            vec!["Handicrafts", "Traditional", "Artisan"]
        );
    }

    #[test]
    fn tags_keep_duplicates_and_drop_empty_segments() {
        assert_eq!(parse_tags("A, B,, A,"), vec!["A", "B", "A"]);
        assert!(parse_tags("").is_empty());
    }

    #[test]
    fn deadline_exactly_five_days_out_is_five_days_left() {
        let now = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap().and_time(NaiveTime::MIN);
        let deadline = now.checked_add_days(Days::new(5)).unwrap();
        assert_eq!(days_until(deadline, now), 5);
    }

    #[test]
    fn partial_days_round_up() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let tomorrow = today.succ_opt().unwrap().and_time(NaiveTime::MIN);
        assert_eq!(days_until(tomorrow, noon(today)), 1);
    }

    #[test]
    fn passed_deadlines_go_negative() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let last_week = today.checked_sub_days(Days::new(7)).unwrap();
        assert_eq!(
            days_until(last_week.and_time(NaiveTime::MIN), today.and_time(NaiveTime::MIN)),
            -7
        );
    }

    #[test]
    fn progress_is_not_clamped() {
        let campaign = Campaign {
            id: 1,
            name: "a".into(),
            business: "b".into(),
            story: "c".into(),
            goal: 100.0,
            raised: 150.0,
            supporters: 3,
            days_left: 1,
            image: PLACEHOLDER_IMAGE.into(),
            tags: vec![],
        };
        assert!((campaign.progress() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn draft_completeness() {
        let mut draft = CampaignDraft {
            name: "Asha".into(),
            business: "Handloom Revival".into(),
            story: "Weaving cooperatives".into(),
            goal: "1000".into(),
            deadline: "2026-08-07".into(),
            tags: "A, B".into(),
            image: None,
        };
        assert!(draft.is_complete());

        draft.goal = "not a number".into();
        assert!(!draft.is_complete());

        draft.goal = "1000".into();
        draft.deadline = "next week".into();
        assert!(!draft.is_complete());

        draft.deadline = "2026-08-07".into();
        draft.story = "  ".into();
        assert!(!draft.is_complete());
    }
}
