use crate::dice::DIE_COUNT;

/// A candidate scoring group: a sub-multiset of the round's die values with
/// its precomputed sum
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subset {
    pub values: Vec<u8>,
    pub sum: u32,
}

impl Subset {
    pub fn size(&self) -> usize {
        self.values.len()
    }
}

/// Enumerate the full power set of the six die positions.
///
/// Produces exactly 2^6 = 64 subsets, including the empty subset and the full
/// set. Bit j of the subset index selects position j, so dice with equal face
/// values stay distinct: [4, 4, ...] yields separate {4} subsets for each
/// physical die.
pub fn enumerate(values: &[u8; DIE_COUNT]) -> Vec<Subset> {
    let count = 1usize << DIE_COUNT;
    let mut subsets = Vec::with_capacity(count);

    for mask in 0..count {
        let mut members = Vec::new();
        let mut sum = 0u32;
        for (position, &value) in values.iter().enumerate() {
            if mask & (1 << position) != 0 {
                members.push(value);
                sum += u32::from(value);
            }
        }
        subsets.push(Subset {
            values: members,
            sum,
        });
    }

    subsets
}

/// Keep only the subsets whose sum equals the target, in enumeration order.
/// The empty subset never matches a nonzero target.
pub fn filter_by_target(subsets: &[Subset], target: u32) -> Vec<Subset> {
    subsets
        .iter()
        .filter(|subset| subset.sum == target)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumerate_produces_64_subsets() {
        let subsets = enumerate(&[1, 2, 3, 4, 5, 6]);
        assert_eq!(subsets.len(), 64);
    }

    #[test]
    fn test_enumerate_includes_empty_and_full_set() {
        let values = [1, 2, 3, 4, 5, 6];
        let subsets = enumerate(&values);

        assert!(subsets.iter().any(|s| s.size() == 0 && s.sum == 0));
        assert!(subsets.iter().any(|s| s.size() == 6 && s.sum == 21));
    }

    #[test]
    fn test_enumerate_distinguishes_equal_faces_by_position() {
        let subsets = enumerate(&[4, 4, 1, 1, 1, 1]);
        let single_fours = subsets
            .iter()
            .filter(|s| s.values == vec![4])
            .count();
        assert_eq!(single_fours, 2, "Each physical die gets its own {{4}} subset");
    }

    #[test]
    fn test_subset_sums_match_members() {
        for subset in enumerate(&[2, 3, 5, 6, 1, 4]) {
            let expected: u32 = subset.values.iter().map(|&v| u32::from(v)).sum();
            assert_eq!(subset.sum, expected);
        }
    }

    #[test]
    fn test_filter_keeps_only_target_sums() {
        let subsets = enumerate(&[4, 4, 4, 2, 2, 6]);
        let filtered = filter_by_target(&subsets, 8);

        assert_eq!(filtered.len(), 8);
        assert!(filtered.iter().all(|s| s.sum == 8));
    }

    #[test]
    fn test_filter_excludes_empty_subset() {
        let subsets = enumerate(&[1, 1, 1, 1, 1, 1]);
        let filtered = filter_by_target(&subsets, 4);
        assert!(filtered.iter().all(|s| s.size() > 0));
    }

    #[test]
    fn test_filter_preserves_enumeration_order() {
        let subsets = enumerate(&[2, 2, 4, 4, 6, 6]);
        let filtered = filter_by_target(&subsets, 8);

        // Enumeration order is ascending bitmask order; the first match for
        // these dice is {2, 2, 4} (positions 0, 1, 2).
        assert_eq!(filtered[0].values, vec![2, 2, 4]);
    }
}
