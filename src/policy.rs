//! The core of the walkability policy library.
//!
//! Two concerns live here: deriving a canonical [`RouteIdentity`] for
//! an origin/destination pair, and deciding whether a route's score
//! qualifies for complaint escalation given its distance.
//!
//! Everything in this module is a pure function over its arguments.
//! Callers validate input at the boundary (see
//! [`Location::new`](crate::location::Location::new) and
//! [`WalkScore::new`](crate::score::WalkScore::new)); the policy
//! functions themselves carry no defensive branching, so the threshold
//! table stays readable.

use serde::{Deserialize, Serialize};

use crate::types::location::Location;
use crate::types::score::WalkScore;

/// Decimal places a coordinate is rounded to before it becomes part of
/// a route key. One precision for every call site: producers and
/// consumers that disagree on rounding would silently fragment the
/// same logical route into different keys.
pub const ROUTE_KEY_DECIMALS: i32 = 5;

/// Routes longer than this are considered impractical to walk;
/// complaint escalation is disabled beyond it.
pub const WALKING_LIMIT_KM: f64 = 7.0;

/// The Central Public Grievance Redress and Monitoring System portal
/// that escalated complaints link out to. Opaque to this library; the
/// portal takes no pre-filled form parameters.
pub const CPGRAMS_URL: &str = "https://pgportal.gov.in/";

/// A deterministic string key correlating records about the same
/// origin-destination pair.
///
/// Ratings, street issues, complaints, and score-lock sessions all
/// reference a route by this key instead of storing duplicate
/// geometry. The key is directional: walking a route in reverse is a
/// distinct user action, so swapping start and end produces a
/// different key by design.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteIdentity(String);

impl RouteIdentity {
    /// Derives the canonical key for a start/end pair.
    ///
    /// Each component is rounded independently to
    /// [`ROUTE_KEY_DECIMALS`] places and formatted in its shortest
    /// form, so `28.61390` and `28.6139` produce the same key. The
    /// comma/underscore separators cannot appear inside a formatted
    /// number, so the scheme is unambiguous.
    ///
    /// # Returns
    /// A key of the form `"{startLat},{startLng}_{endLat},{endLng}"`,
    /// e.g. `"28.6139,77.209_28.6145,77.21"`.
    pub fn from_endpoints(start: &Location, end: &Location) -> RouteIdentity {
        RouteIdentity(format!(
            "{},{}_{},{}",
            round_component(start.latitude.into_inner()),
            round_component(start.longitude.into_inner()),
            round_component(end.latitude.into_inner()),
            round_component(end.longitude.into_inner()),
        ))
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RouteIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rounds one coordinate component to [`ROUTE_KEY_DECIMALS`] places.
fn round_component(value: f64) -> f64 {
    let scale = 10f64.powi(ROUTE_KEY_DECIMALS);
    let rounded = (value * scale).round() / scale;
    // Negative zero would format as "-0".
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Returns the score floor below which a route qualifies for complaint
/// escalation, selected by distance band.
///
/// Longer walks are judged more leniently before escalation is
/// warranted, so the floor drops as distance grows:
///
/// | distance          | threshold |
/// |-------------------|-----------|
/// | up to 1 km        | 40        |
/// | 1 – 3 km          | 35        |
/// | 3 – 5 km          | 25        |
/// | 5 – 7 km          | 20        |
/// | beyond 7 km       | `None`    |
///
/// `None` is a policy outcome, not an error: past
/// [`WALKING_LIMIT_KM`] walking is impractical and escalation is
/// disabled outright. Callers render it as an informational notice.
pub fn complaint_threshold(distance_meters: f64) -> Option<u8> {
    let distance_km = distance_meters / 1000.0;

    if distance_km > WALKING_LIMIT_KM {
        return None;
    }

    if distance_km <= 1.0 {
        Some(40)
    } else if distance_km <= 3.0 {
        Some(35)
    } else if distance_km <= 5.0 {
        Some(25)
    } else {
        Some(20)
    }
}

/// Decides whether complaint escalation is offered for a scored route.
///
/// Returns `true` iff the distance has an applicable threshold and the
/// score falls strictly below it. Pure and side-effect-free; safe to
/// call from any number of concurrent callers.
pub fn can_escalate(score: WalkScore, distance_meters: f64) -> bool {
    match complaint_threshold(distance_meters) {
        Some(threshold) => score.get() < threshold,
        None => false,
    }
}
