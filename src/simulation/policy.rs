use crate::dice::DIE_COUNT;
use crate::rng::GameRng;
use crate::score::{score_round, Category};

/// Category-selection policy for simulated games. Each category is used
/// exactly once across the ten rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Pick any unused category at random; never hold dice
    Random,
    /// Pick the unused category scoring best against the final dice, and
    /// hold the best-scoring group between throws
    Greedy,
}

impl Policy {
    pub fn parse(s: &str) -> Option<Policy> {
        match s {
            "random" => Some(Policy::Random),
            "greedy" => Some(Policy::Greedy),
            _ => None,
        }
    }
}

/// Pick a category from the unused pool. Greedy takes the first best-scoring
/// one in menu order; Random picks uniformly.
pub fn choose_category(
    policy: Policy,
    values: &[u8; DIE_COUNT],
    unused: &[Category],
    rng: &mut GameRng,
) -> Category {
    debug_assert!(!unused.is_empty());
    match policy {
        Policy::Random => unused[rng.pick(unused.len())],
        Policy::Greedy => {
            let mut best = unused[0];
            let mut best_score = score_round(values, best).score;
            for &category in &unused[1..] {
                let score = score_round(values, category).score;
                if score > best_score {
                    best = category;
                    best_score = score;
                }
            }
            best
        }
    }
}

/// Which dice the greedy policy keeps between throws: the positions backing
/// the currently best-scoring group
pub fn desired_holds(values: &[u8; DIE_COUNT], unused: &[Category], rng: &mut GameRng) -> [bool; DIE_COUNT] {
    let category = choose_category(Policy::Greedy, values, unused, rng);
    let outcome = score_round(values, category);

    let mut holds = [false; DIE_COUNT];
    let mut pool = outcome.dice_used;
    for (position, &value) in values.iter().enumerate() {
        if let Some(index) = pool.iter().position(|&v| v == value) {
            pool.swap_remove(index);
            holds[position] = true;
        }
    }
    holds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Policy::parse("random"), Some(Policy::Random));
        assert_eq!(Policy::parse("greedy"), Some(Policy::Greedy));
        assert_eq!(Policy::parse("optimal"), None);
    }

    #[test]
    fn test_random_picks_from_unused_pool() {
        let mut rng = GameRng::new(Some(21));
        let unused = [Category::Low, Category::Target(7)];
        for _ in 0..50 {
            let pick = choose_category(Policy::Random, &[1, 2, 3, 4, 5, 6], &unused, &mut rng);
            assert!(unused.contains(&pick));
        }
    }

    #[test]
    fn test_greedy_picks_best_category() {
        let mut rng = GameRng::new(Some(22));
        // Five single sixes score 30 at target 6; no other category comes
        // close with these dice.
        let values = [6, 6, 6, 6, 6, 1];
        let pick = choose_category(Policy::Greedy, &values, &Category::ALL, &mut rng);
        assert_eq!(pick, Category::Target(6));
    }

    #[test]
    fn test_greedy_prefers_first_on_ties() {
        let mut rng = GameRng::new(Some(23));
        // Neither 7 nor 9 can be hit with all sixes, so both tie at zero.
        let values = [6, 6, 6, 6, 6, 6];
        let unused = [Category::Target(7), Category::Target(9)];
        let pick = choose_category(Policy::Greedy, &values, &unused, &mut rng);
        assert_eq!(pick, Category::Target(7));
    }

    #[test]
    fn test_desired_holds_back_the_best_group() {
        let mut rng = GameRng::new(Some(24));
        let values = [6, 6, 6, 6, 6, 6];
        let holds = desired_holds(&values, &[Category::Target(12)], &mut rng);
        assert_eq!(holds, [true; DIE_COUNT], "All six dice form sum-12 pairs");
    }

    #[test]
    fn test_desired_holds_low_keeps_small_dice() {
        let mut rng = GameRng::new(Some(25));
        let values = [1, 5, 2, 6, 3, 4];
        let holds = desired_holds(&values, &[Category::Low], &mut rng);
        assert_eq!(holds, [true, false, true, false, true, false]);
    }
}
