//! Lexical similarity scoring.

/// Scores similarity between two strings in `[0, 1]`.
///
/// Sørensen–Dice coefficient over character bigrams: symmetric, and 1.0
/// only for identical inputs. Callers normalize case and strip punctuation
/// beforehand. Used purely as a ranking key — never as an accept/reject
/// threshold.
#[must_use]
pub fn score(a: &str, b: &str) -> f64 {
    strsim::sorensen_dice(a, b)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use super::*;

    #[test]
    fn test_identical_strings_score_one() {
        // Arrange & Act & Assert
        assert_eq!(score("breaking bad", "breaking bad"), 1.0);
    }

    #[test]
    fn test_disjoint_strings_score_zero() {
        // Arrange & Act & Assert
        assert_eq!(score("abcd", "wxyz"), 0.0);
    }

    #[test]
    fn test_symmetric() {
        // Arrange
        let a = "the wire";
        let b = "the wire uk";

        // Act & Assert
        assert_eq!(score(a, b), score(b, a));
    }

    #[test]
    fn test_closer_match_ranks_higher() {
        // Arrange
        let query = "alien";

        // Act
        let close = score(query, "alien");
        let far = score(query, "alien resurrection");

        // Assert
        assert!(close > far);
    }

    #[test]
    fn test_bounded_by_unit_interval() {
        // Arrange & Act
        let s = score("night manager", "night manage");

        // Assert
        assert!(s > 0.0 && s < 1.0);
    }
}
