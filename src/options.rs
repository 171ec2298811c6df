// options.rs
use rand::seq::SliceRandom;
use rand::Rng;

/// No fare option is ever shown below this value.
pub const FARE_FLOOR: u32 = 5;

/// Distractor deltas, tried in this order until four options exist.
const DELTAS: [i32; 6] = [-6, -4, -2, 2, 4, 6];

/// Builds the shuffled answer set for one round: the correct fare plus up
/// to three distractors. Candidates that collide with an earlier option
/// (which happens near the fare floor) are skipped, so the result can hold
/// fewer than four values.
pub fn build_fare_options(correct_fare: u32, rng: &mut impl Rng) -> Vec<u32> {
    let mut options = vec![correct_fare];

    for delta in DELTAS {
        if options.len() >= 4 {
            break;
        }
        let candidate = (correct_fare as i64 + delta as i64).max(FARE_FLOOR as i64) as u32;
        if !options.contains(&candidate) {
            options.push(candidate);
        }
    }

    options.shuffle(rng);
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_correct_fare_exactly_once() {
        let mut rng = rand::rng();
        for fare in 5..60 {
            let options = build_fare_options(fare, &mut rng);
            let hits = options.iter().filter(|&&f| f == fare).count();
            assert_eq!(hits, 1, "fare {fare} should appear exactly once");
        }
    }

    #[test]
    fn at_most_four_distinct_options_all_above_floor() {
        let mut rng = rand::rng();
        for fare in 5..60 {
            let options = build_fare_options(fare, &mut rng);
            assert!(options.len() <= 4);
            for &option in &options {
                assert!(option >= FARE_FLOOR);
            }
            let mut deduped = options.clone();
            deduped.sort_unstable();
            deduped.dedup();
            assert_eq!(deduped.len(), options.len(), "options must be distinct");
        }
    }

    #[test]
    fn typical_fares_reach_four_options() {
        let mut rng = rand::rng();
        // Every fare in the trip catalog is 8 or more, which always leaves
        // room for three distractors.
        for fare in 8..40 {
            assert_eq!(build_fare_options(fare, &mut rng).len(), 4);
        }
    }

    #[test]
    fn clamped_deltas_collapse_onto_the_floor() {
        let mut rng = rand::rng();
        // fare 5: every negative delta clamps onto the floor value, so the
        // three positive deltas supply all the distractors.
        let mut options = build_fare_options(5, &mut rng);
        options.sort_unstable();
        assert_eq!(options, vec![5, 7, 9, 11]);
    }

    #[test]
    fn sub_floor_fares_may_yield_fewer_options() {
        let mut rng = rand::rng();
        // fare 1: 1+2 and 1+4 both clamp to the floor, leaving only three
        // distinct values. The variable-size set is returned as-is.
        let mut options = build_fare_options(1, &mut rng);
        options.sort_unstable();
        assert_eq!(options, vec![1, 5, 7]);
    }

    #[test]
    fn shuffling_preserves_the_option_set() {
        let mut rng = rand::rng();
        let mut first = build_fare_options(20, &mut rng);
        first.sort_unstable();
        for _ in 0..20 {
            let mut again = build_fare_options(20, &mut rng);
            again.sort_unstable();
            assert_eq!(first, again);
        }
    }
}
