//! Contribution counters and the achievements they unlock.
//!
//! Every community action bumps one of four counters; crossing a
//! counter milestone earns an achievement. Three extra achievements
//! act as profile tags and are granted by the embedding application
//! rather than by a counter.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-user totals of community activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserContributions {
    pub user_id: Uuid,
    pub routes_analyzed: u32,
    pub scores_submitted: u32,
    pub images_uploaded: u32,
    pub complaints_raised: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserContributions {
    /// A fresh, all-zero record for a user's first contribution.
    pub fn new(user_id: Uuid, now: DateTime<Utc>) -> UserContributions {
        UserContributions {
            user_id,
            routes_analyzed: 0,
            scores_submitted: 0,
            images_uploaded: 0,
            complaints_raised: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Increments one counter and touches the update timestamp.
    pub fn bump(&mut self, field: ContributionField, now: DateTime<Utc>) {
        let counter = match field {
            ContributionField::RoutesAnalyzed => &mut self.routes_analyzed,
            ContributionField::ScoresSubmitted => &mut self.scores_submitted,
            ContributionField::ImagesUploaded => &mut self.images_uploaded,
            ContributionField::ComplaintsRaised => &mut self.complaints_raised,
        };
        *counter += 1;
        self.updated_at = now;
    }
}

/// Which counter a contribution lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContributionField {
    RoutesAnalyzed,
    ScoresSubmitted,
    ImagesUploaded,
    ComplaintsRaised,
}

/// The achievements a user can earn.
///
/// Serialized ids match the backend's achievement column values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Achievement {
    #[serde(rename = "first_route")]
    FirstRoute,
    #[serde(rename = "explorer_10")]
    Explorer10,
    #[serde(rename = "explorer_50")]
    Explorer50,
    #[serde(rename = "explorer_100")]
    Explorer100,
    #[serde(rename = "first_rating")]
    FirstRating,
    #[serde(rename = "rater_10")]
    Rater10,
    #[serde(rename = "rater_50")]
    Rater50,
    #[serde(rename = "rater_100")]
    Rater100,
    #[serde(rename = "first_upload")]
    FirstUpload,
    #[serde(rename = "photographer_10")]
    Photographer10,
    #[serde(rename = "photographer_50")]
    Photographer50,
    #[serde(rename = "first_complaint")]
    FirstComplaint,
    #[serde(rename = "advocate_10")]
    Advocate10,
    #[serde(rename = "advocate_50")]
    Advocate50,
    #[serde(rename = "safety_advocate")]
    SafetyAdvocate,
    #[serde(rename = "urban_explorer")]
    UrbanExplorer,
    #[serde(rename = "active_contributor")]
    ActiveContributor,
}

impl Achievement {
    /// Display name shown on the dashboard.
    pub fn name(&self) -> &'static str {
        match self {
            Achievement::FirstRoute => "First Steps",
            Achievement::Explorer10 => "City Explorer",
            Achievement::Explorer50 => "Urban Pioneer",
            Achievement::Explorer100 => "Master Navigator",
            Achievement::FirstRating => "Voice Heard",
            Achievement::Rater10 => "Active Rater",
            Achievement::Rater50 => "Street Critic",
            Achievement::Rater100 => "Community Pillar",
            Achievement::FirstUpload => "First Snapshot",
            Achievement::Photographer10 => "Street Photographer",
            Achievement::Photographer50 => "Visual Reporter",
            Achievement::FirstComplaint => "Citizen Voice",
            Achievement::Advocate10 => "Community Advocate",
            Achievement::Advocate50 => "Change Maker",
            Achievement::SafetyAdvocate => "Safety Advocate",
            Achievement::UrbanExplorer => "Urban Explorer",
            Achievement::ActiveContributor => "Active Contributor",
        }
    }

    /// Dashboard description of how the achievement was earned.
    pub fn description(&self) -> &'static str {
        match self {
            Achievement::FirstRoute => "Analyzed your first route",
            Achievement::Explorer10 => "Analyzed 10 routes",
            Achievement::Explorer50 => "Analyzed 50 routes",
            Achievement::Explorer100 => "Analyzed 100 routes",
            Achievement::FirstRating => "Submitted your first rating",
            Achievement::Rater10 => "Submitted 10 ratings",
            Achievement::Rater50 => "Submitted 50 ratings",
            Achievement::Rater100 => "Submitted 100 ratings",
            Achievement::FirstUpload => "Uploaded your first image",
            Achievement::Photographer10 => "Uploaded 10 images",
            Achievement::Photographer50 => "Uploaded 50 images",
            Achievement::FirstComplaint => "Raised your first complaint",
            Achievement::Advocate10 => "Raised 10 complaints",
            Achievement::Advocate50 => "Raised 50 complaints",
            Achievement::SafetyAdvocate => "Committed to street safety",
            Achievement::UrbanExplorer => "Dedicated route analyzer",
            Achievement::ActiveContributor => "Consistent platform engagement",
        }
    }

    /// Profile tag this achievement grants, if any.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            Achievement::Explorer100 | Achievement::UrbanExplorer => Some("Urban Explorer"),
            Achievement::Advocate10 | Achievement::SafetyAdvocate => Some("Safety Advocate"),
            Achievement::ActiveContributor => Some("Active Contributor"),
            _ => None,
        }
    }
}

const ROUTE_MILESTONES: [(u32, Achievement); 4] = [
    (1, Achievement::FirstRoute),
    (10, Achievement::Explorer10),
    (50, Achievement::Explorer50),
    (100, Achievement::Explorer100),
];

const RATING_MILESTONES: [(u32, Achievement); 4] = [
    (1, Achievement::FirstRating),
    (10, Achievement::Rater10),
    (50, Achievement::Rater50),
    (100, Achievement::Rater100),
];

const UPLOAD_MILESTONES: [(u32, Achievement); 3] = [
    (1, Achievement::FirstUpload),
    (10, Achievement::Photographer10),
    (50, Achievement::Photographer50),
];

const COMPLAINT_MILESTONES: [(u32, Achievement); 3] = [
    (1, Achievement::FirstComplaint),
    (10, Achievement::Advocate10),
    (50, Achievement::Advocate50),
];

/// Returns every milestone achievement the given counters have earned.
///
/// The result covers all milestones at or below the current counts, so
/// awarding stays correct even if a counter jumped past a milestone
/// (e.g. bulk image uploads). Tag achievements granted directly are
/// not included here.
pub fn achievements_for(contributions: &UserContributions) -> Vec<Achievement> {
    let mut earned = Vec::new();
    let counters = [
        (contributions.routes_analyzed, &ROUTE_MILESTONES[..]),
        (contributions.scores_submitted, &RATING_MILESTONES[..]),
        (contributions.images_uploaded, &UPLOAD_MILESTONES[..]),
        (contributions.complaints_raised, &COMPLAINT_MILESTONES[..]),
    ];
    for (count, milestones) in counters {
        for (threshold, achievement) in milestones {
            if count >= *threshold {
                earned.push(*achievement);
            }
        }
    }
    earned
}

/// Derives the profile tags a set of earned achievements grants,
/// de-duplicated, in display order.
///
/// Most tags come from a single achievement, but "Active Contributor"
/// is also granted compositely: holding both
/// [`Achievement::Explorer10`] and [`Achievement::Rater10`] shows the
/// same sustained engagement as the dedicated achievement.
pub fn user_tags(achievements: &[Achievement]) -> Vec<&'static str> {
    let earned: HashSet<Achievement> = achievements.iter().copied().collect();
    let mut tags = Vec::new();

    if earned.contains(&Achievement::Explorer100) || earned.contains(&Achievement::UrbanExplorer) {
        tags.push("Urban Explorer");
    }
    if earned.contains(&Achievement::Advocate10) || earned.contains(&Achievement::SafetyAdvocate) {
        tags.push("Safety Advocate");
    }
    if earned.contains(&Achievement::ActiveContributor)
        || (earned.contains(&Achievement::Explorer10) && earned.contains(&Achievement::Rater10))
    {
        tags.push("Active Contributor");
    }

    tags
}

#[cfg(test)]
mod contribution_tests {
    use super::*;

    fn contributions(routes: u32, ratings: u32, uploads: u32, complaints: u32) -> UserContributions {
        let now = Utc::now();
        UserContributions {
            user_id: Uuid::new_v4(),
            routes_analyzed: routes,
            scores_submitted: ratings,
            images_uploaded: uploads,
            complaints_raised: complaints,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn ut_bump_touches_one_counter() {
        let mut record = UserContributions::new(Uuid::new_v4(), Utc::now());
        record.bump(ContributionField::ComplaintsRaised, Utc::now());
        assert_eq!(record.complaints_raised, 1);
        assert_eq!(record.routes_analyzed, 0);
        assert_eq!(record.scores_submitted, 0);
        assert_eq!(record.images_uploaded, 0);
    }

    #[test]
    fn ut_no_achievements_for_fresh_record() {
        let record = UserContributions::new(Uuid::new_v4(), Utc::now());
        assert!(achievements_for(&record).is_empty());
    }

    #[test]
    fn ut_first_milestones() {
        let earned = achievements_for(&contributions(1, 0, 0, 0));
        assert_eq!(earned, vec![Achievement::FirstRoute]);
    }

    #[test]
    fn ut_all_milestones_at_or_below_count() {
        let earned = achievements_for(&contributions(52, 0, 0, 0));
        assert_eq!(
            earned,
            vec![
                Achievement::FirstRoute,
                Achievement::Explorer10,
                Achievement::Explorer50,
            ]
        );
    }

    #[test]
    fn ut_milestones_across_counters() {
        let earned = achievements_for(&contributions(1, 10, 0, 1));
        assert!(earned.contains(&Achievement::FirstRoute));
        assert!(earned.contains(&Achievement::FirstRating));
        assert!(earned.contains(&Achievement::Rater10));
        assert!(earned.contains(&Achievement::FirstComplaint));
        assert!(!earned.contains(&Achievement::FirstUpload));
    }

    #[test]
    fn ut_tags_deduplicated() {
        let tags = user_tags(&[
            Achievement::Explorer100,
            Achievement::UrbanExplorer,
            Achievement::Advocate10,
        ]);
        assert_eq!(tags, vec!["Urban Explorer", "Safety Advocate"]);
    }

    /// Steady analyzing plus steady rating grants "Active Contributor"
    /// even without the dedicated achievement.
    #[test]
    fn ut_active_contributor_composite_tag() {
        let tags = user_tags(&[Achievement::Explorer10, Achievement::Rater10]);
        assert_eq!(tags, vec!["Active Contributor"]);

        // Either half alone is not enough.
        assert!(user_tags(&[Achievement::Explorer10]).is_empty());
        assert!(user_tags(&[Achievement::Rater10]).is_empty());

        // The dedicated achievement still works on its own.
        assert_eq!(
            user_tags(&[Achievement::ActiveContributor]),
            vec!["Active Contributor"]
        );
    }

    #[test]
    fn ut_achievement_descriptions() {
        assert_eq!(
            Achievement::FirstRoute.description(),
            "Analyzed your first route"
        );
        assert_eq!(Achievement::Rater50.description(), "Submitted 50 ratings");
        assert_eq!(
            Achievement::ActiveContributor.description(),
            "Consistent platform engagement"
        );
    }

    #[test]
    fn ut_achievement_wire_ids() {
        let json = serde_json::to_string(&Achievement::Explorer10).unwrap();
        assert_eq!(json, "\"explorer_10\"");
    }
}
