//! Community operations: submitting ratings, reporting street issues,
//! and escalating complaints.
//!
//! Each operation validates its raw input at the boundary, writes the
//! record through the [`WalkabilityStore`] seam, bumps the matching
//! contribution counter, and awards any milestone achievements the
//! bump crossed. The store and user context arrive as explicit
//! parameters; callers own transaction discipline.

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use uuid::Uuid;

use crate::error::Error;
use crate::policy::{self, RouteIdentity, CPGRAMS_URL};
use crate::store::{UserContext, WalkabilityStore};
use crate::types::contribution::{
    achievements_for, Achievement, ContributionField, UserContributions,
};
use crate::types::location::Location;
use crate::types::record::{
    Complaint, ComplaintKind, IssueStatus, IssueType, RouteRating, Stars, StreetIssue,
};
use crate::types::score::WalkScore;

/// Raw rating input as it arrives from the client.
///
/// Star values are unvalidated integers here; [`submit_rating`] is the
/// boundary that checks them.
#[derive(Debug, Clone)]
pub struct RatingInput {
    pub start: Location,
    pub end: Location,
    pub start_name: Option<String>,
    pub end_name: Option<String>,
    pub overall: u8,
    pub walkability: Option<u8>,
    pub safety: Option<u8>,
    pub lighting: Option<u8>,
    pub accessibility: Option<u8>,
    pub comment: Option<String>,
}

/// Raw street-issue input.
#[derive(Debug, Clone)]
pub struct IssueInput {
    pub route: RouteIdentity,
    pub pin: Location,
    pub location_name: Option<String>,
    pub kind: IssueType,
    pub description: Option<String>,
    pub image_urls: Vec<String>,
}

/// Raw complaint input.
#[derive(Debug, Clone)]
pub struct ComplaintInput {
    pub start: Location,
    pub end: Location,
    pub start_name: String,
    pub end_name: String,
    pub score: u8,
    pub distance_meters: f64,
    pub description: Option<String>,
}

/// Validates and stores a rating, replacing the user's previous rating
/// of the same route.
///
/// Derives the route key from the endpoints itself so every rating of
/// the same pair lands under one key regardless of caller rounding.
pub fn submit_rating(
    store: &mut dyn WalkabilityStore,
    ctx: &UserContext,
    input: RatingInput,
    now: DateTime<Utc>,
) -> Result<RouteRating, Error> {
    let route = RouteIdentity::from_endpoints(&input.start, &input.end);
    debug!("rating submission for route {}", route);

    let rating = RouteRating {
        id: Uuid::new_v4(),
        user_id: ctx.user_id,
        route,
        start: input.start,
        end: input.end,
        start_name: input.start_name,
        end_name: input.end_name,
        overall: Stars::new(input.overall)?,
        walkability: input.walkability.map(Stars::new).transpose()?,
        safety: input.safety.map(Stars::new).transpose()?,
        lighting: input.lighting.map(Stars::new).transpose()?,
        accessibility: input.accessibility.map(Stars::new).transpose()?,
        comment: input.comment,
        created_at: now,
    };

    store.upsert_rating(rating.clone())?;
    record_contribution(store, ctx, ContributionField::ScoresSubmitted, now)?;
    info!("rating stored for route {}", rating.route);
    Ok(rating)
}

/// Stores a reported street issue in [`IssueStatus::Reported`] state
/// and counts one image-upload contribution per attached photo.
pub fn report_issue(
    store: &mut dyn WalkabilityStore,
    ctx: &UserContext,
    input: IssueInput,
    now: DateTime<Utc>,
) -> Result<StreetIssue, Error> {
    let issue = StreetIssue {
        id: Uuid::new_v4(),
        user_id: ctx.user_id,
        route: input.route,
        pin: input.pin,
        location_name: input.location_name,
        kind: input.kind,
        description: input.description,
        image_urls: input.image_urls,
        status: IssueStatus::Reported,
        created_at: now,
        updated_at: now,
    };

    store.insert_issue(issue.clone())?;
    for _ in &issue.image_urls {
        record_contribution(store, ctx, ContributionField::ImagesUploaded, now)?;
    }
    info!(
        "street issue {} reported on route {}",
        issue.kind.label(),
        issue.route
    );
    Ok(issue)
}

/// Validates and stores an escalated complaint.
///
/// Refuses with [`Error::EscalationUnavailable`] when the policy does
/// not offer escalation for the score/distance pair, either because
/// the score meets the threshold or the distance exceeds practical
/// walking limits. On success the record carries the grievance-portal
/// URL and the redirect timestamp.
pub fn file_complaint(
    store: &mut dyn WalkabilityStore,
    ctx: &UserContext,
    input: ComplaintInput,
    now: DateTime<Utc>,
) -> Result<Complaint, Error> {
    let score = WalkScore::new(input.score)?;
    if !policy::can_escalate(score, input.distance_meters) {
        warn!(
            "escalation refused: score {} over {} m",
            score, input.distance_meters
        );
        return Err(Error::EscalationUnavailable {
            score: score.get(),
            distance_meters: input.distance_meters,
        });
    }

    let complaint = Complaint {
        id: Uuid::new_v4(),
        user_id: ctx.user_id,
        route: RouteIdentity::from_endpoints(&input.start, &input.end),
        start_name: input.start_name,
        end_name: input.end_name,
        start: input.start,
        end: input.end,
        score,
        distance_meters: input.distance_meters,
        kind: ComplaintKind::Walkability,
        description: input.description,
        redirect_url: CPGRAMS_URL.to_string(),
        redirected_at: now,
        created_at: now,
    };

    store.insert_complaint(complaint.clone())?;
    record_contribution(store, ctx, ContributionField::ComplaintsRaised, now)?;
    info!("complaint filed for route {}", complaint.route);
    Ok(complaint)
}

/// Bumps one contribution counter, creating the record on first touch,
/// and awards any milestone achievements the new total has reached.
///
/// # Returns
/// The achievements newly earned by this bump; already-held ones are
/// skipped.
pub fn record_contribution(
    store: &mut dyn WalkabilityStore,
    ctx: &UserContext,
    field: ContributionField,
    now: DateTime<Utc>,
) -> Result<Vec<Achievement>, Error> {
    let mut contributions = store
        .contributions(ctx.user_id)?
        .unwrap_or_else(|| UserContributions::new(ctx.user_id, now));
    contributions.bump(field, now);

    let earned = achievements_for(&contributions);
    store.put_contributions(contributions)?;

    let mut newly_earned = Vec::new();
    for achievement in earned {
        if store.award(ctx.user_id, achievement)? {
            info!("achievement earned: {}", achievement.name());
            newly_earned.push(achievement);
        }
    }
    Ok(newly_earned)
}
