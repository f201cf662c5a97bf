//! Tabular text rendering for [`Matrix`].

use super::Matrix;
use num_traits::Float;
use std::fmt;

/// Spaces placed after the widest element of the matrix.
const COLUMN_PADDING: usize = 2;

impl<T: Float + fmt::Display> Matrix<T> {
    /// Render as aligned columns, one line per row.
    ///
    /// Every column is as wide as the longest formatted element plus a fixed
    /// padding; trailing padding is trimmed from each line.
    pub fn prettify(&self) -> String {
        let cells: Vec<Vec<String>> = self
            .to_rows()
            .iter()
            .map(|r| r.iter().map(|x| x.to_string()).collect())
            .collect();
        let width = cells
            .iter()
            .flatten()
            .map(|s| s.chars().count())
            .max()
            .unwrap_or(0)
            + COLUMN_PADDING;

        let mut out = String::new();
        for row in &cells {
            let mut line = String::new();
            for cell in row {
                line.push_str(&format!("{cell:<width$}"));
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}

impl<T: Float + fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prettify())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_to_widest_element() {
        let m = Matrix::from_rows(vec![vec![-2.0, 1.0], vec![1.5, -0.5]]).unwrap();
        assert_eq!(m.prettify(), "-2    1\n1.5   -0.5\n");
    }

    #[test]
    fn single_digit_grid() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.prettify(), "1  2\n3  4\n");
        assert_eq!(format!("{m}"), m.prettify());
    }

    #[test]
    fn column_matrix() {
        let m = Matrix::from_rows(vec![vec![10.0], vec![2.0]]).unwrap();
        assert_eq!(m.prettify(), "10\n2\n");
    }
}
