//! Score-lock sessions.
//!
//! The placeholder generator produces a fresh score on every call, so
//! without a lock a user would watch the number change each time the
//! route re-renders. Locking pins the first score to the (user, route)
//! pair for an hour.

use chrono::{DateTime, Duration, Utc};
use log::{debug, info};
use uuid::Uuid;

use crate::error::Error;
use crate::policy::RouteIdentity;
use crate::store::{UserContext, WalkabilityStore};
use crate::types::record::ScoreSession;
use crate::types::score::WalkScore;

/// How long a locked score stays valid.
pub const SCORE_LOCK_MINUTES: i64 = 60;

/// Returns the user's unexpired score session for a route, if any.
///
/// An expired session is treated as absent; the caller generates and
/// locks a fresh score in that case.
pub fn current_score(
    store: &dyn WalkabilityStore,
    ctx: &UserContext,
    route: &RouteIdentity,
    now: DateTime<Utc>,
) -> Result<Option<ScoreSession>, Error> {
    let session = store.session(ctx.user_id, route)?;
    Ok(session.filter(|s| !s.is_expired(now)))
}

/// Locks a score to the (user, route) pair.
///
/// Replaces any previous session for the pair and restarts the clock:
/// the new lock expires [`SCORE_LOCK_MINUTES`] from `now`.
pub fn lock_score(
    store: &mut dyn WalkabilityStore,
    ctx: &UserContext,
    route: &RouteIdentity,
    score: WalkScore,
    now: DateTime<Utc>,
) -> Result<ScoreSession, Error> {
    debug!("locking score {} for route {}", score, route);
    let session = ScoreSession {
        id: Uuid::new_v4(),
        user_id: ctx.user_id,
        route: route.clone(),
        score,
        locked_at: now,
        expires_at: now + Duration::minutes(SCORE_LOCK_MINUTES),
    };
    store.upsert_session(session.clone())?;
    info!("score locked for route {} until {}", route, session.expires_at);
    Ok(session)
}
