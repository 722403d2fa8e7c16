//! Item-level averages and acquisition progress.

/// Rounded mean of the given item levels; 0 for an empty slice.
pub fn average_item_level(levels: &[i32]) -> i32 {
    if levels.is_empty() {
        return 0;
    }
    let sum: i64 = levels.iter().map(|&l| i64::from(l)).sum();
    (sum as f64 / levels.len() as f64).round() as i32
}

/// Percentage of items obtained, rounded; 0 when the set has no items.
pub fn progress_percent(obtained: usize, total: usize) -> i32 {
    if total == 0 {
        return 0;
    }
    (100.0 * obtained as f64 / total as f64).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_empty_is_zero() {
        assert_eq!(average_item_level(&[]), 0);
    }

    #[test]
    fn test_average_rounds() {
        assert_eq!(average_item_level(&[730]), 730);
        assert_eq!(average_item_level(&[730, 731]), 731); // 730.5 rounds up
        assert_eq!(average_item_level(&[730, 730, 731]), 730); // 730.33 rounds down
        assert_eq!(average_item_level(&[700, 710, 720]), 710);
    }

    #[test]
    fn test_average_many_slots() {
        // Ten slots at mixed levels, the realistic case
        let levels = [735, 730, 730, 725, 725, 720, 710, 710, 710, 705];
        assert_eq!(average_item_level(&levels), 720);
    }

    #[test]
    fn test_progress_zero_total() {
        assert_eq!(progress_percent(0, 0), 0);
    }

    #[test]
    fn test_progress_rounds() {
        assert_eq!(progress_percent(0, 10), 0);
        assert_eq!(progress_percent(10, 10), 100);
        assert_eq!(progress_percent(1, 3), 33);
        assert_eq!(progress_percent(2, 3), 67);
        assert_eq!(progress_percent(1, 8), 13); // 12.5 rounds up
    }
}
