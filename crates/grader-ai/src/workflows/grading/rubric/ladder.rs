//! Threshold ladders and composite tiers: the two reusable shapes behind
//! every graduated criterion scorer.

use super::CriterionScore;

/// One rung: the minimum signal count required and what reaching it awards.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Rung {
    pub(crate) min: usize,
    pub(crate) points: u16,
    pub(crate) explanation: &'static str,
}

/// Walk the rungs from the top; the first rung whose threshold the count
/// meets wins, so no tier is ever double-counted. Rungs must be ordered by
/// strictly descending `min`.
pub(crate) fn climb(count: usize, rungs: &[Rung], floor: (u16, &'static str)) -> CriterionScore {
    debug_assert!(rungs.windows(2).all(|pair| pair[0].min > pair[1].min));

    for rung in rungs {
        if count >= rung.min {
            return CriterionScore::new(rung.points, rung.explanation);
        }
    }
    CriterionScore::new(floor.0, floor.1)
}

/// Tier table for criteria that weigh two independent signals jointly.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CompositeTiers {
    pub(crate) both: (u16, &'static str),
    pub(crate) first_only: (u16, &'static str),
    pub(crate) second_only: (u16, &'static str),
    pub(crate) neither: (u16, &'static str),
}

/// Both signals → top tier, either alone → its middle tier, neither → floor.
pub(crate) fn composite(first: bool, second: bool, tiers: &CompositeTiers) -> CriterionScore {
    let (points, explanation) = match (first, second) {
        (true, true) => tiers.both,
        (true, false) => tiers.first_only,
        (false, true) => tiers.second_only,
        (false, false) => tiers.neither,
    };
    CriterionScore::new(points, explanation)
}

/// Binary criterion helper with a fixed explanation per branch.
pub(crate) fn presence(
    found: bool,
    points: u16,
    found_explanation: &'static str,
    missing_explanation: &'static str,
) -> CriterionScore {
    if found {
        CriterionScore::new(points, found_explanation)
    } else {
        CriterionScore::new(0, missing_explanation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RUNGS: &[Rung] = &[
        Rung {
            min: 7,
            points: 45,
            explanation: "top",
        },
        Rung {
            min: 4,
            points: 30,
            explanation: "middle",
        },
    ];

    #[test]
    fn first_satisfied_rung_wins() {
        assert_eq!(climb(9, RUNGS, (10, "floor")).points, 45);
        assert_eq!(climb(7, RUNGS, (10, "floor")).points, 45);
        assert_eq!(climb(5, RUNGS, (10, "floor")).points, 30);
        assert_eq!(climb(0, RUNGS, (10, "floor")).points, 10);
    }

    #[test]
    fn climb_is_monotone_in_the_signal() {
        let mut previous = 0;
        for count in 0..12 {
            let points = climb(count, RUNGS, (10, "floor")).points;
            assert!(points >= previous, "count {count} decreased the award");
            previous = points;
        }
    }

    #[test]
    fn composite_distinguishes_all_four_tiers() {
        let tiers = CompositeTiers {
            both: (40, "both"),
            first_only: (25, "first"),
            second_only: (25, "second"),
            neither: (10, "neither"),
        };
        assert_eq!(composite(true, true, &tiers).points, 40);
        assert_eq!(composite(true, false, &tiers).explanation, "first");
        assert_eq!(composite(false, true, &tiers).explanation, "second");
        assert_eq!(composite(false, false, &tiers).points, 10);
    }
}
