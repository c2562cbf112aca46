//! Simulated walkability scores.
//!
//! The platform does not have a real scoring pipeline yet; the
//! prototype shows a uniformly random score in [0, 100] and locks it
//! per session (see [`crate::session`]) so it stays stable while the
//! user rates or reports. Swap this module out when real scoring data
//! lands; nothing downstream assumes how the score was produced.

use rand::Rng;

use crate::types::score::WalkScore;

/// Draws a simulated walkability score from the given RNG.
pub fn simulated_walk_score<R: Rng>(rng: &mut R) -> WalkScore {
    let value = rng.gen_range(0..=100u8);
    WalkScore::new(value).expect("generator range is 0..=100")
}

#[cfg(test)]
mod generator_tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn ut_scores_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let score = simulated_walk_score(&mut rng);
            assert!(score.get() <= 100);
        }
    }

    #[test]
    fn ut_same_seed_same_scores() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            assert_eq!(simulated_walk_score(&mut a), simulated_walk_score(&mut b));
        }
    }
}
