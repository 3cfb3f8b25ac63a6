pub const BASE_WEIGHT: u32 = 10;
pub const AVAILABLE_BONUS: u32 = 50;
pub const LIKE_BONUS: u32 = 100;
/// Floor for disliked dishes: unlikely, never impossible.
pub const DISLIKE_WEIGHT: u32 = 1;

/// Selection weight of one candidate. A dislike overrides every bonus.
pub fn weight(missing: usize, liked: bool, disliked: bool) -> u32 {
    if disliked {
        return DISLIKE_WEIGHT;
    }

    let mut weight = BASE_WEIGHT;
    if missing == 0 {
        weight += AVAILABLE_BONUS;
    }
    if liked {
        weight += LIKE_BONUS;
    }

    weight
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_table() {
        assert_eq!(weight(2, false, false), 10);
        assert_eq!(weight(0, false, false), 60);
        assert_eq!(weight(3, true, false), 110);
        assert_eq!(weight(0, true, false), 160);
    }

    #[test]
    fn test_dislike_dominates() {
        assert_eq!(weight(0, false, true), 1);
        assert_eq!(weight(0, true, true), 1);
        assert_eq!(weight(5, false, true), 1);
    }
}
