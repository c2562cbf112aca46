//! The persistence seam.
//!
//! The hosted backend owns the actual tables and their row-level
//! policies; this crate only defines the [`WalkabilityStore`] trait it
//! must satisfy, plus an in-memory implementation used by the tests
//! and by embedders running without a database.
//!
//! Everything that writes takes an explicit [`UserContext`] — there is
//! no ambient session or process-wide singleton to reach into.

use std::collections::HashMap;

use uuid::Uuid;

use crate::error::Error;
use crate::policy::RouteIdentity;
use crate::types::contribution::{Achievement, UserContributions};
use crate::types::record::{Complaint, RouteRating, ScoreSession, StreetIssue};

/// The user on whose behalf an operation runs.
///
/// Authentication happens upstream; by the time a `UserContext`
/// exists, the id has been verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserContext {
    pub user_id: Uuid,
}

impl UserContext {
    pub fn new(user_id: Uuid) -> UserContext {
        UserContext { user_id }
    }
}

/// Storage operations the walkability services need.
///
/// Implementations must uphold two uniqueness constraints: at most one
/// rating and at most one score session per (user, route). Upserts
/// replace the existing row for that pair.
pub trait WalkabilityStore {
    /// Inserts or replaces the user's rating of a route.
    fn upsert_rating(&mut self, rating: RouteRating) -> Result<(), Error>;

    /// All ratings of a route, across users.
    fn ratings_for_route(&self, route: &RouteIdentity) -> Result<Vec<RouteRating>, Error>;

    /// Records a reported street issue.
    fn insert_issue(&mut self, issue: StreetIssue) -> Result<(), Error>;

    /// Issues pinned along a route, across users.
    fn issues_for_route(&self, route: &RouteIdentity) -> Result<Vec<StreetIssue>, Error>;

    /// Issues a user has reported anywhere.
    fn issues_for_user(&self, user_id: Uuid) -> Result<Vec<StreetIssue>, Error>;

    /// Records an escalated complaint.
    fn insert_complaint(&mut self, complaint: Complaint) -> Result<(), Error>;

    /// Complaints a user has raised.
    fn complaints_for_user(&self, user_id: Uuid) -> Result<Vec<Complaint>, Error>;

    /// The user's score session for a route, expired or not.
    fn session(&self, user_id: Uuid, route: &RouteIdentity) -> Result<Option<ScoreSession>, Error>;

    /// Inserts or replaces the user's score session for a route.
    fn upsert_session(&mut self, session: ScoreSession) -> Result<(), Error>;

    /// The user's contribution counters, if any exist yet.
    fn contributions(&self, user_id: Uuid) -> Result<Option<UserContributions>, Error>;

    /// Writes the user's contribution counters.
    fn put_contributions(&mut self, contributions: UserContributions) -> Result<(), Error>;

    /// Grants an achievement. Returns `false` if the user already held
    /// it; granting twice is not an error.
    fn award(&mut self, user_id: Uuid, achievement: Achievement) -> Result<bool, Error>;

    /// Every achievement the user holds, in the order earned.
    fn achievements(&self, user_id: Uuid) -> Result<Vec<Achievement>, Error>;
}

/// In-process store backed by hash maps.
///
/// Enforces the same per-(user, route) uniqueness the hosted backend
/// does, so service code behaves identically against either.
#[derive(Debug, Default)]
pub struct MemoryStore {
    ratings: HashMap<(Uuid, RouteIdentity), RouteRating>,
    issues: Vec<StreetIssue>,
    complaints: Vec<Complaint>,
    sessions: HashMap<(Uuid, RouteIdentity), ScoreSession>,
    contributions: HashMap<Uuid, UserContributions>,
    achievements: HashMap<Uuid, Vec<Achievement>>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }
}

impl WalkabilityStore for MemoryStore {
    fn upsert_rating(&mut self, rating: RouteRating) -> Result<(), Error> {
        self.ratings
            .insert((rating.user_id, rating.route.clone()), rating);
        Ok(())
    }

    fn ratings_for_route(&self, route: &RouteIdentity) -> Result<Vec<RouteRating>, Error> {
        Ok(self
            .ratings
            .values()
            .filter(|r| &r.route == route)
            .cloned()
            .collect())
    }

    fn insert_issue(&mut self, issue: StreetIssue) -> Result<(), Error> {
        self.issues.push(issue);
        Ok(())
    }

    fn issues_for_route(&self, route: &RouteIdentity) -> Result<Vec<StreetIssue>, Error> {
        Ok(self
            .issues
            .iter()
            .filter(|i| &i.route == route)
            .cloned()
            .collect())
    }

    fn issues_for_user(&self, user_id: Uuid) -> Result<Vec<StreetIssue>, Error> {
        Ok(self
            .issues
            .iter()
            .filter(|i| i.user_id == user_id)
            .cloned()
            .collect())
    }

    fn insert_complaint(&mut self, complaint: Complaint) -> Result<(), Error> {
        self.complaints.push(complaint);
        Ok(())
    }

    fn complaints_for_user(&self, user_id: Uuid) -> Result<Vec<Complaint>, Error> {
        Ok(self
            .complaints
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect())
    }

    fn session(&self, user_id: Uuid, route: &RouteIdentity) -> Result<Option<ScoreSession>, Error> {
        Ok(self.sessions.get(&(user_id, route.clone())).cloned())
    }

    fn upsert_session(&mut self, session: ScoreSession) -> Result<(), Error> {
        self.sessions
            .insert((session.user_id, session.route.clone()), session);
        Ok(())
    }

    fn contributions(&self, user_id: Uuid) -> Result<Option<UserContributions>, Error> {
        Ok(self.contributions.get(&user_id).cloned())
    }

    fn put_contributions(&mut self, contributions: UserContributions) -> Result<(), Error> {
        self.contributions
            .insert(contributions.user_id, contributions);
        Ok(())
    }

    fn award(&mut self, user_id: Uuid, achievement: Achievement) -> Result<bool, Error> {
        let held = self.achievements.entry(user_id).or_default();
        if held.contains(&achievement) {
            return Ok(false);
        }
        held.push(achievement);
        Ok(true)
    }

    fn achievements(&self, user_id: Uuid) -> Result<Vec<Achievement>, Error> {
        Ok(self.achievements.get(&user_id).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod store_tests {
    use chrono::Utc;

    use super::*;
    use crate::types::location::Location;
    use crate::types::record::Stars;
    use crate::types::score::WalkScore;

    fn route() -> RouteIdentity {
        let start = Location::new(28.61390, 77.20900).unwrap();
        let end = Location::new(28.61450, 77.21000).unwrap();
        RouteIdentity::from_endpoints(&start, &end)
    }

    fn rating(user_id: Uuid, overall: u8) -> RouteRating {
        let start = Location::new(28.61390, 77.20900).unwrap();
        let end = Location::new(28.61450, 77.21000).unwrap();
        RouteRating {
            id: Uuid::new_v4(),
            user_id,
            route: route(),
            start,
            end,
            start_name: None,
            end_name: None,
            overall: Stars::new(overall).unwrap(),
            walkability: None,
            safety: None,
            lighting: None,
            accessibility: None,
            comment: None,
            created_at: Utc::now(),
        }
    }

    /// A second rating from the same user replaces the first; different
    /// users keep their own.
    #[test]
    fn test_one_rating_per_user_per_route() {
        let mut store = MemoryStore::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        store.upsert_rating(rating(alice, 2)).unwrap();
        store.upsert_rating(rating(alice, 4)).unwrap();
        store.upsert_rating(rating(bob, 5)).unwrap();

        let ratings = store.ratings_for_route(&route()).unwrap();
        assert_eq!(ratings.len(), 2);

        let alices: Vec<_> = ratings.iter().filter(|r| r.user_id == alice).collect();
        assert_eq!(alices.len(), 1);
        assert_eq!(alices[0].overall.get(), 4);
    }

    #[test]
    fn test_one_session_per_user_per_route() {
        let mut store = MemoryStore::new();
        let user = Uuid::new_v4();
        let now = Utc::now();

        for score in [30u8, 80u8] {
            store
                .upsert_session(ScoreSession {
                    id: Uuid::new_v4(),
                    user_id: user,
                    route: route(),
                    score: WalkScore::new(score).unwrap(),
                    locked_at: now,
                    expires_at: now + chrono::Duration::hours(1),
                })
                .unwrap();
        }

        let session = store.session(user, &route()).unwrap().unwrap();
        assert_eq!(session.score.get(), 80);
    }

    #[test]
    fn test_award_is_idempotent() {
        let mut store = MemoryStore::new();
        let user = Uuid::new_v4();

        assert!(store.award(user, Achievement::FirstRoute).unwrap());
        assert!(!store.award(user, Achievement::FirstRoute).unwrap());
        assert_eq!(
            store.achievements(user).unwrap(),
            vec![Achievement::FirstRoute]
        );
    }

    #[test]
    fn test_unknown_user_has_nothing() {
        let store = MemoryStore::new();
        let user = Uuid::new_v4();
        assert_eq!(store.contributions(user).unwrap(), None);
        assert!(store.achievements(user).unwrap().is_empty());
        assert!(store.complaints_for_user(user).unwrap().is_empty());
    }
}
