//! Text and LaTeX rendering of [`Matrix2`].

use crate::matrix::Matrix2;

use itertools::Itertools;

use std::fmt;

impl fmt::Display for Matrix2 {
    /// Bracketed rows with each column right-aligned to its widest entry.
    ///
    /// # Example
    ///
    /// ```
    /// # use arithgroup::matrix::Matrix2;
    /// let m = Matrix2::new(1, 2, 15, 31);
    /// assert_eq!(m.to_string(), "[ 1  2]\n[15 31]");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<String> = self.entries().iter().map(|x| x.to_string()).collect();
        let widths = [
            cells[0].len().max(cells[2].len()),
            cells[1].len().max(cells[3].len()),
        ];

        let rows = cells.chunks(2).map(|row| {
            let line = row
                .iter()
                .zip(widths)
                .map(|(cell, width)| format!("{:>width$}", cell, width = width))
                .join(" ");
            format!("[{}]", line)
        });

        write!(f, "{}", rows.format("\n"))
    }
}

impl Matrix2 {
    /// LaTeX markup for the matrix, in parentheses.
    ///
    /// # Example
    ///
    /// ```
    /// # use arithgroup::matrix::Matrix2;
    /// let m = Matrix2::new(1, 2, 15, 31);
    /// assert_eq!(
    ///     m.to_latex(),
    ///     "\\left(\\begin{array}{rr}\n1 & 2 \\\\\n15 & 31\n\\end{array}\\right)"
    /// );
    /// ```
    pub fn to_latex(&self) -> String {
        let body = self
            .entries()
            .chunks(2)
            .map(|row| row.iter().join(" & "))
            .join(" \\\\\n");

        format!("\\left(\\begin{{array}}{{rr}}\n{}\n\\end{{array}}\\right)", body)
    }
}
