//! Value-list parsing and random input generation.

use std::ops::Range;

use rand::Rng;

use crate::error::SortVizError;

/// Parse a comma-separated list of integers.
///
/// Tokens are trimmed. Blank input, empty tokens (`"1,,2"`, trailing
/// commas) and anything that is not an integer fail the whole parse, so a
/// sort never starts from a partial list.
pub fn parse_values(input: &str) -> Result<Vec<i64>, SortVizError> {
    if input.trim().is_empty() {
        return Err(SortVizError::InvalidInput("no values given".to_owned()));
    }
    input
        .split(',')
        .enumerate()
        .map(|(position, token)| {
            let token = token.trim();
            if token.is_empty() {
                return Err(SortVizError::InvalidInput(format!(
                    "empty value at position {}",
                    position + 1
                )));
            }
            token.parse::<i64>().map_err(|_| {
                SortVizError::InvalidInput(format!(
                    "'{token}' at position {} is not an integer",
                    position + 1
                ))
            })
        })
        .collect()
}

/// `count` random values drawn uniformly from `range`.
///
/// An empty range yields `count` copies of `range.start`.
pub fn random_values<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    range: Range<i64>,
) -> Vec<i64> {
    if range.is_empty() {
        return vec![range.start; count];
    }
    (0..count).map(|_| rng.random_range(range.clone())).collect()
}

/// Random values formatted as submit-ready input text.
pub fn random_input<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    range: Range<i64>,
) -> String {
    random_values(rng, count, range)
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn parses_trimmed_tokens() {
        assert_eq!(parse_values("5,3,4,1,2").unwrap(), vec![5, 3, 4, 1, 2]);
        assert_eq!(parse_values(" -1 , 20,3 ").unwrap(), vec![-1, 20, 3]);
        assert_eq!(parse_values("7").unwrap(), vec![7]);
    }

    #[test]
    fn rejects_blank_input() {
        assert!(matches!(
            parse_values("   "),
            Err(SortVizError::InvalidInput(_))
        ));
        assert!(parse_values("").is_err());
    }

    #[test]
    fn rejects_empty_tokens() {
        assert!(parse_values("1,,2").is_err());
        assert!(parse_values("1,2,").is_err());
    }

    #[test]
    fn rejects_non_integers() {
        let err = parse_values("1,two,3").unwrap_err();
        assert!(err.to_string().contains("'two' at position 2"));
        assert!(parse_values("1.5,2").is_err());
    }

    #[test]
    fn random_values_respect_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let values = random_values(&mut rng, 50, 0..10);
        assert_eq!(values.len(), 50);
        assert!(values.iter().all(|v| (0..10).contains(v)));
    }

    #[test]
    fn random_input_parses_back() {
        let mut rng = StdRng::seed_from_u64(11);
        let text = random_input(&mut rng, 5, 0..10);
        assert_eq!(parse_values(&text).unwrap().len(), 5);
    }

    #[test]
    fn empty_range_repeats_start() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(random_values(&mut rng, 3, 4..4), vec![4, 4, 4]);
    }
}
