//! Struct definitions for the community records that reference a
//! route: ratings, street issues, government complaints, and
//! score-lock sessions.
//!
//! Every record is a tagged structure with fixed fields. Numeric
//! ranges are validated where values enter the system
//! ([`Stars::new`], [`WalkScore::new`](crate::score::WalkScore::new));
//! the records themselves only ever hold validated values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Error;
use crate::policy::RouteIdentity;
use crate::types::location::Location;
use crate::types::score::WalkScore;

/// A star rating, an integer in [1, 5].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Stars(u8);

impl Stars {
    /// Validates a raw star count.
    pub fn new(value: u8) -> Result<Stars, Error> {
        if !(1..=5).contains(&value) {
            return Err(Error::StarsOutOfRange(value));
        }
        Ok(Stars(value))
    }

    /// Returns the raw star count.
    pub fn get(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Stars {
    type Error = Error;

    fn try_from(value: u8) -> Result<Stars, Error> {
        Stars::new(value)
    }
}

impl From<Stars> for u8 {
    fn from(stars: Stars) -> u8 {
        stars.0
    }
}

/// One user's rating of one route.
///
/// The backend enforces at most one rating per (user, route); a second
/// submission replaces the first. The overall rating is required, the
/// per-aspect ratings are optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRating {
    pub id: Uuid,
    pub user_id: Uuid,
    pub route: RouteIdentity,
    pub start: Location,
    pub end: Location,
    pub start_name: Option<String>,
    pub end_name: Option<String>,
    pub overall: Stars,
    pub walkability: Option<Stars>,
    pub safety: Option<Stars>,
    pub lighting: Option<Stars>,
    pub accessibility: Option<Stars>,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Averages over all ratings of one route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateRating {
    pub average_overall: f64,
    pub average_walkability: f64,
    pub average_safety: f64,
    pub average_lighting: f64,
    pub average_accessibility: f64,
    pub total_ratings: usize,
}

impl AggregateRating {
    /// Reduces a set of ratings into their averages.
    ///
    /// Ratings that omit an aspect are excluded from that aspect's
    /// average; an aspect nobody rated averages to 0. Returns [`None`]
    /// for an empty slice, which callers render as "no ratings yet".
    pub fn from_ratings(ratings: &[RouteRating]) -> Option<AggregateRating> {
        if ratings.is_empty() {
            return None;
        }

        let overall_sum: u32 = ratings.iter().map(|r| u32::from(r.overall.get())).sum();

        Some(AggregateRating {
            average_overall: f64::from(overall_sum) / ratings.len() as f64,
            average_walkability: aspect_average(ratings, |r| r.walkability),
            average_safety: aspect_average(ratings, |r| r.safety),
            average_lighting: aspect_average(ratings, |r| r.lighting),
            average_accessibility: aspect_average(ratings, |r| r.accessibility),
            total_ratings: ratings.len(),
        })
    }
}

fn aspect_average(ratings: &[RouteRating], aspect: fn(&RouteRating) -> Option<Stars>) -> f64 {
    let rated: Vec<u8> = ratings.iter().filter_map(|r| aspect(r).map(|s| s.get())).collect();
    if rated.is_empty() {
        return 0.0;
    }
    let sum: u32 = rated.iter().map(|&v| u32::from(v)).sum();
    f64::from(sum) / rated.len() as f64
}

/// The kinds of street problems a user can pin along a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    BrokenSidewalk,
    PoorLighting,
    NoCrossing,
    Pothole,
    Obstruction,
    SafetyHazard,
    Accessibility,
    Other,
}

impl IssueType {
    /// Human-readable label for the issue kind.
    pub fn label(&self) -> &'static str {
        match self {
            IssueType::BrokenSidewalk => "Broken Sidewalk",
            IssueType::PoorLighting => "Poor Lighting",
            IssueType::NoCrossing => "No Pedestrian Crossing",
            IssueType::Pothole => "Pothole",
            IssueType::Obstruction => "Path Obstruction",
            IssueType::SafetyHazard => "Safety Hazard",
            IssueType::Accessibility => "Accessibility Issue",
            IssueType::Other => "Other Issue",
        }
    }
}

/// Review status of a reported street issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueStatus {
    Reported,
    Acknowledged,
    Resolved,
}

/// A problem reported at a specific point along a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreetIssue {
    pub id: Uuid,
    pub user_id: Uuid,
    pub route: RouteIdentity,
    /// Where along the route the problem is.
    pub pin: Location,
    pub location_name: Option<String>,
    pub kind: IssueType,
    pub description: Option<String>,
    /// Public URLs of uploaded evidence photos. The image storage
    /// itself is an external collaborator.
    pub image_urls: Vec<String>,
    pub status: IssueStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// What a complaint is about. Walkability is the only kind today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintKind {
    Walkability,
}

/// A logged grievance about a poorly walkable route, escalated to the
/// CPGRAMS portal.
///
/// The record keeps the full route context (names, coordinates, score,
/// distance) so the complaint stands alone even if the referenced
/// ratings change later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Complaint {
    pub id: Uuid,
    pub user_id: Uuid,
    pub route: RouteIdentity,
    pub start_name: String,
    pub end_name: String,
    pub start: Location,
    pub end: Location,
    pub score: WalkScore,
    pub distance_meters: f64,
    pub kind: ComplaintKind,
    pub description: Option<String>,
    /// The grievance-portal URL the user was sent to.
    pub redirect_url: String,
    pub redirected_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// A walkability score locked to one user's session for a route.
///
/// The simulated score generator produces a fresh number on every
/// call; locking pins the first result for an hour so the user sees a
/// stable score while rating or reporting. At most one session exists
/// per (user, route).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSession {
    pub id: Uuid,
    pub user_id: Uuid,
    pub route: RouteIdentity,
    pub score: WalkScore,
    pub locked_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl ScoreSession {
    /// Whether the lock has lapsed at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}
