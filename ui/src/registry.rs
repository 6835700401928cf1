//! The campaign registry: an ordered, in-memory store of campaigns with
//! pure transition functions for creation and donation, independent of any
//! rendering.

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::campaign::{days_until, parse_deadline, parse_tags, Campaign, CampaignDraft,
    PLACEHOLDER_IMAGE};

#[derive(Debug, Error, PartialEq)]
pub enum RegistryError {
    #[error("all campaign fields are required")]
    IncompleteDraft,
    #[error("funding goal must be a positive number")]
    InvalidGoal,
    #[error("campaign deadline must be a valid date")]
    InvalidDeadline,
    #[error("contribution amount must be a positive number")]
    InvalidAmount,
    #[error("no campaign with id {0}")]
    UnknownCampaign(u64),
}

/// Most-recent-first sequence of campaigns. Entries are only ever inserted
/// at the front or updated in place; never deleted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CampaignRegistry {
    campaigns: Vec<Campaign>,
}

impl CampaignRegistry {
    pub fn new(campaigns: Vec<Campaign>) -> Self {
        Self { campaigns }
    }

    /// The three campaigns every fresh session starts with.
    pub fn seed() -> Self {
        Self::new(vec![
            Campaign {
                id: 1,
                name: "Green Earth Initiative".to_string(),
                business: "Urban Tree Plantation".to_string(),
                story: "Planting 10,000 trees in urban areas to improve air quality".to_string(),
                goal: 50_000.0,
                raised: 32_000.0,
                supporters: 120,
                days_left: 15,
                image: "https://plus.unsplash.com/premium_photo-1681140560943-1c1736109b78?w=600&auto=format&fit=crop&q=60".to_string(),
                tags: vec![
                    "Reforestation".to_string(),
                    "Air Quality".to_string(),
                    "Urban Greening".to_string(),
                ],
            },
            Campaign {
                id: 2,
                name: "Solar for All".to_string(),
                business: "Community Solar Panels".to_string(),
                story: "Installing solar panels in rural schools to provide clean energy"
                    .to_string(),
                goal: 75_000.0,
                raised: 54_000.0,
                supporters: 85,
                days_left: 10,
                image: "https://images.unsplash.com/photo-1509391366360-2e959784a276".to_string(),
                tags: vec![
                    "Renewable Energy".to_string(),
                    "Sustainability".to_string(),
                    "Rural Development".to_string(),
                ],
            },
            Campaign {
                id: 3,
                name: "Clean Water Mission".to_string(),
                business: "Plastic-Free Rivers".to_string(),
                story: "Organizing river clean-up drives and promoting plastic alternatives"
                    .to_string(),
                goal: 30_000.0,
                raised: 21_000.0,
                supporters: 67,
                days_left: 12,
                image: "https://plus.unsplash.com/premium_photo-1673631127663-8b3babc8b996?w=600&auto=format&fit=crop&q=60".to_string(),
                tags: vec![
                    "Water Conservation".to_string(),
                    "Plastic Waste".to_string(),
                    "Community Action".to_string(),
                ],
            },
        ])
    }

    pub fn campaigns(&self) -> &[Campaign] {
        &self.campaigns
    }

    /// Builds a campaign from `draft` and inserts it at the front.
    ///
    /// `id` is the caller's creation timestamp (see
    /// [`crate::campaign::unix_millis`]); `now` anchors the days-left
    /// computation. Passing the clock in keeps the transition pure.
    pub fn create(
        &mut self,
        draft: &CampaignDraft,
        id: u64,
        now: NaiveDateTime,
    ) -> Result<&Campaign, RegistryError> {
        if !draft.has_all_fields() {
            return Err(RegistryError::IncompleteDraft);
        }
        let goal: f64 = draft
            .goal
            .trim()
            .parse()
            .map_err(|_| RegistryError::InvalidGoal)?;
        if !goal.is_finite() || goal <= 0.0 {
            return Err(RegistryError::InvalidGoal);
        }
        let deadline = parse_deadline(&draft.deadline).ok_or(RegistryError::InvalidDeadline)?;

        let campaign = Campaign {
            id,
            name: draft.name.clone(),
            business: draft.business.clone(),
            story: draft.story.clone(),
            goal,
            raised: 0.0,
            supporters: 0,
            days_left: days_until(deadline, now),
            image: draft
                .image
                .clone()
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            tags: parse_tags(&draft.tags),
        };
        self.campaigns.insert(0, campaign);
        Ok(&self.campaigns[0])
    }

    /// Applies a donation of `amount` to the campaign with `id`: raised grows
    /// by exactly `amount`, supporters by one, every other entry untouched.
    ///
    /// An id with no matching campaign is an error and leaves the sequence
    /// unchanged.
    pub fn donate(&mut self, id: u64, amount: f64) -> Result<&Campaign, RegistryError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(RegistryError::InvalidAmount);
        }
        let position = self
            .campaigns
            .iter()
            .position(|campaign| campaign.id == id)
            .ok_or(RegistryError::UnknownCampaign(id))?;
        let entry = &mut self.campaigns[position];
        entry.raised += amount;
        entry.supporters += 1;
        Ok(&self.campaigns[position])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 6)
            .unwrap()
            .and_time(NaiveTime::MIN)
    }

    fn draft() -> CampaignDraft {
        CampaignDraft {
            name: "Asha Devi".to_string(),
            business: "Handloom Revival".to_string(),
            story: "Restarting the village weaving cooperative".to_string(),
            goal: "1000".to_string(),
            deadline: "2026-08-07".to_string(),
            tags: "A, B".to_string(),
            image: None,
        }
    }

    #[test]
    fn create_prepends_a_fresh_campaign() {
        let mut registry = CampaignRegistry::seed();
        let before = registry.campaigns().len();

        let created = registry.create(&draft(), 1_754_000_000_000, now()).unwrap().clone();

        assert_eq!(registry.campaigns().len(), before + 1);
        assert_eq!(registry.campaigns()[0], created);
        assert_eq!(created.raised, 0.0);
        assert_eq!(created.supporters, 0);
        assert_eq!(created.days_left, 1);
        assert_eq!(created.tags, vec!["A", "B"]);
        assert_eq!(created.image, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn create_keeps_a_picked_image() {
        let mut registry = CampaignRegistry::default();
        let with_image = CampaignDraft {
            image: Some("blob:abc123".to_string()),
            ..draft()
        };
        let created = registry.create(&with_image, 42, now()).unwrap();
        assert_eq!(created.image, "blob:abc123");
    }

    #[test]
    fn create_rejects_bad_drafts() {
        let mut registry = CampaignRegistry::seed();
        let pristine = registry.clone();

        let empty_field = CampaignDraft {
            story: "   ".to_string(),
            ..draft()
        };
        assert_eq!(
            registry.create(&empty_field, 42, now()),
            Err(RegistryError::IncompleteDraft)
        );

        let bad_goal = CampaignDraft {
            goal: "lots".to_string(),
            ..draft()
        };
        assert_eq!(
            registry.create(&bad_goal, 42, now()),
            Err(RegistryError::InvalidGoal)
        );

        let bad_deadline = CampaignDraft {
            deadline: "soon".to_string(),
            ..draft()
        };
        assert_eq!(
            registry.create(&bad_deadline, 42, now()),
            Err(RegistryError::InvalidDeadline)
        );

        assert_eq!(registry, pristine);
    }

    #[test]
    fn donate_updates_only_the_target() {
        let mut registry = CampaignRegistry::seed();
        let before: Vec<Campaign> = registry.campaigns().to_vec();

        registry.donate(2, 500.0).unwrap();

        for (previous, current) in before.iter().zip(registry.campaigns()) {
            if current.id == 2 {
                assert_eq!(current.raised, previous.raised + 500.0);
                assert_eq!(current.supporters, previous.supporters + 1);
            } else {
                assert_eq!(current, previous);
            }
        }
    }

    #[test]
    fn donate_to_seed_campaign() {
        let mut registry = CampaignRegistry::seed();
        let updated = registry.donate(1, 1000.0).unwrap();
        assert_eq!(updated.raised, 33_000.0);
        assert_eq!(updated.supporters, 121);
    }

    #[test]
    fn donate_unknown_id_changes_nothing() {
        let mut registry = CampaignRegistry::seed();
        let pristine = registry.clone();
        assert_eq!(
            registry.donate(9999, 100.0),
            Err(RegistryError::UnknownCampaign(9999))
        );
        assert_eq!(registry, pristine);
    }

    #[test]
    fn donate_rejects_non_positive_amounts() {
        let mut registry = CampaignRegistry::seed();
        let pristine = registry.clone();
        assert_eq!(registry.donate(1, 0.0), Err(RegistryError::InvalidAmount));
        assert_eq!(registry.donate(1, -5.0), Err(RegistryError::InvalidAmount));
        assert_eq!(registry.donate(1, f64::NAN), Err(RegistryError::InvalidAmount));
        assert_eq!(registry, pristine);
    }
}
