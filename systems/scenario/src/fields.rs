//! Field extraction for tagged scenario lines.
//!
//! Fields are separated by `-`. Numeric fields are runs of ASCII digits and
//! text fields are runs of anything else, trimmed, with blank runs dropped.

use crate::ScenarioError;

/// Field separator used by scenario files.
pub(crate) const SEPARATOR: char = '-';

pub(crate) fn numbers<const N: usize>(
    line: usize,
    tag: char,
    text: &str,
) -> Result<[u32; N], ScenarioError> {
    let runs: Vec<&str> = text
        .split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .collect();
    if runs.len() != N {
        return Err(ScenarioError::InvalidInput { line, tag });
    }

    let mut values = [0_u32; N];
    for (slot, run) in values.iter_mut().zip(runs) {
        *slot = run
            .parse::<u32>()
            .map_err(|_| ScenarioError::NumericParseFailure {
                line,
                value: run.to_owned(),
            })?;
    }
    Ok(values)
}

pub(crate) fn words<const N: usize>(
    line: usize,
    tag: char,
    text: &str,
) -> Result<[&str; N], ScenarioError> {
    let runs: Vec<&str> = text
        .split(|c: char| c == SEPARATOR || c.is_ascii_digit())
        .map(str::trim)
        .filter(|run| !run.is_empty())
        .collect();
    <[&str; N]>::try_from(runs).map_err(|_| ScenarioError::InvalidInput { line, tag })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_ignore_separators_and_text() {
        assert_eq!(numbers::<2>(1, 'C', "C - 12 - 4"), Ok([12, 4]));
        assert_eq!(numbers::<3>(1, 'T', "T-0-3-2"), Ok([0, 3, 2]));
    }

    #[test]
    fn numbers_enforce_arity() {
        assert_eq!(
            numbers::<2>(3, 'M', "M - 1 - 2 - 3"),
            Err(ScenarioError::InvalidInput { line: 3, tag: 'M' })
        );
    }

    #[test]
    fn oversized_numbers_fail_conversion() {
        assert_eq!(
            numbers::<2>(2, 'M', "M - 99999999999 - 1"),
            Err(ScenarioError::NumericParseFailure {
                line: 2,
                value: "99999999999".to_owned(),
            })
        );
    }

    #[test]
    fn words_keep_internal_spaces() {
        let fields = words::<4>(1, 'A', "A - Lara Croft - 1 - 1 - S - AADADAGGA");
        assert_eq!(fields, Ok(["A", "Lara Croft", "S", "AADADAGGA"]));
    }

    #[test]
    fn words_drop_blank_runs_between_numbers() {
        let fields = words::<4>(1, 'A', "A -  Lara  -  1  -  1  -  S  -  AGD  ");
        assert_eq!(fields, Ok(["A", "Lara", "S", "AGD"]));
    }
}
