//! Safest choice: the row whose worst case is best.

use crate::error::{Error, Result};
use crate::search::PayoffMatrix;

/// Values this close together are the same outcome.
const EPSILON: f64 = 1e-9;

/// Index of the user option with the best worst case.
///
/// Opponent columns whose value is the same in every row are dropped first:
/// on those the user's choice changes nothing, so they should not decide
/// anything. Rows with pruned cells lost to an earlier row and are only
/// considered when no row is complete.
pub fn maximin(matrix: &PayoffMatrix) -> Result<usize> {
    if matrix.rows() == 0 || matrix.cols() == 0 {
        return Err(Error::EmptyPayoffMatrix);
    }

    let columns = decisive_columns(matrix);
    let complete: Vec<usize> = (0..matrix.rows()).filter(|&r| matrix.row_is_complete(r)).collect();
    let candidates = if complete.is_empty() {
        (0..matrix.rows()).collect()
    } else {
        complete
    };

    let mut best: Option<(usize, f64)> = None;
    for row in candidates {
        let worst = columns
            .iter()
            .filter_map(|&col| matrix.get(row, col))
            .reduce(f64::min);
        let Some(worst) = worst else { continue };
        if best.map_or(true, |(_, b)| worst > b) {
            best = Some((row, worst));
        }
    }
    Ok(best.map_or(0, |(row, _)| row))
}

/// Columns where the user's option makes a difference. Falls back to every
/// column when none does.
pub fn decisive_columns(matrix: &PayoffMatrix) -> Vec<usize> {
    let decisive: Vec<usize> = (0..matrix.cols())
        .filter(|&col| {
            let mut known = (0..matrix.rows()).filter_map(|row| matrix.get(row, col));
            match known.next() {
                Some(first) => known.any(|v| (v - first).abs() > EPSILON),
                None => false,
            }
        })
        .collect();
    if decisive.is_empty() {
        (0..matrix.cols()).collect()
    } else {
        decisive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;

    fn matrix(values: &[&[f64]]) -> PayoffMatrix {
        let rows = (0..values.len()).map(|i| Action::Move(format!("u{i}"))).collect();
        let cols = (0..values[0].len()).map(|j| Action::Move(format!("o{j}"))).collect();
        let mut m = PayoffMatrix::new(rows, cols);
        for (i, row) in values.iter().enumerate() {
            for (j, v) in row.iter().enumerate() {
                m.set(i, j, *v);
            }
        }
        m
    }

    #[test]
    fn test_picks_best_worst_case() {
        let m = matrix(&[&[5.0, -10.0], &[1.0, 2.0], &[3.0, -1.0]]);
        assert_eq!(maximin(&m).unwrap(), 1);
    }

    #[test]
    fn test_constant_column_is_ignored() {
        // o1 scores -50 whatever the user does
        let m = matrix(&[&[5.0, -50.0], &[1.0, -50.0]]);
        assert_eq!(decisive_columns(&m), vec![0]);
        assert_eq!(maximin(&m).unwrap(), 0);

        let without = matrix(&[&[5.0], &[1.0]]);
        assert_eq!(maximin(&without).unwrap(), maximin(&m).unwrap());
    }

    #[test]
    fn test_all_constant_keeps_every_column() {
        let m = matrix(&[&[2.0, 7.0], &[2.0, 7.0]]);
        assert_eq!(decisive_columns(&m), vec![0, 1]);
        assert_eq!(maximin(&m).unwrap(), 0);
    }

    #[test]
    fn test_pruned_rows_lose() {
        let mut m = matrix(&[&[4.0, 3.0], &[9.0, 0.0]]);
        m.values[3] = None;
        assert_eq!(maximin(&m).unwrap(), 0);
    }

    #[test]
    fn test_empty_matrix() {
        let m = PayoffMatrix::new(Vec::new(), vec![Action::None]);
        assert!(matches!(maximin(&m), Err(Error::EmptyPayoffMatrix)));
    }
}
