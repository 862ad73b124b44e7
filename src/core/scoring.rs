use crate::models::ScoreCurve;

/// Map a raw cosine similarity to a user-facing match score (0-100).
///
/// Logistic curve: 100 / (1 + e^(-steepness * (s - midpoint))).
/// The default curve (steepness 15, midpoint 0.15) compresses everyday
/// similarity values into a reassuring high range.
///
/// Monotonically non-decreasing in `similarity`; saturates at 0 and 100
/// for extreme inputs. A non-finite similarity scores 0.
pub fn match_score(similarity: f64, curve: &ScoreCurve) -> u8 {
    if similarity.is_nan() {
        return 0;
    }

    let score = 100.0 / (1.0 + (-curve.steepness * (similarity - curve.midpoint)).exp());
    score.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_curve_endpoints() {
        let curve = ScoreCurve::default();

        // score(0) = round(100 / (1 + e^(15 * 0.15))) = round(9.536...) = 10
        assert_eq!(match_score(0.0, &curve), 10);
        // score(1) = round(100 / (1 + e^(-15 * 0.85))) = 100
        assert_eq!(match_score(1.0, &curve), 100);
    }

    #[test]
    fn test_midpoint_maps_to_fifty() {
        let curve = ScoreCurve::default();
        assert_eq!(match_score(curve.midpoint, &curve), 50);
    }

    #[test]
    fn test_monotonically_non_decreasing() {
        let curve = ScoreCurve::default();
        let mut previous = 0;
        for step in 0..=1000 {
            let similarity = step as f64 / 1000.0;
            let score = match_score(similarity, &curve);
            assert!(
                score >= previous,
                "score decreased at similarity {}: {} < {}",
                similarity,
                score,
                previous
            );
            previous = score;
        }
    }

    #[test]
    fn test_saturates_without_overflow() {
        let curve = ScoreCurve::default();
        assert_eq!(match_score(-1000.0, &curve), 0);
        assert_eq!(match_score(1000.0, &curve), 100);
        assert_eq!(match_score(f64::NEG_INFINITY, &curve), 0);
        assert_eq!(match_score(f64::INFINITY, &curve), 100);
        assert_eq!(match_score(f64::NAN, &curve), 0);
    }

    #[test]
    fn test_custom_curve() {
        // A flat curve centred at 0.5 maps 0.5 to 50
        let curve = ScoreCurve {
            steepness: 1.0,
            midpoint: 0.5,
        };
        assert_eq!(match_score(0.5, &curve), 50);
        assert!(match_score(0.0, &curve) < 50);
        assert!(match_score(1.0, &curve) > 50);
    }
}
