//! Conversions between `Matrix<char>` and line-oriented text.

use std::fmt;
use std::str::FromStr;

use super::{Matrix, MatrixError, Size};

impl Matrix<char> {
    /// Builds a character grid, one line per row.
    ///
    /// Requires at least one line and every line to hold the same number of
    /// characters.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, MatrixError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lines = lines.into_iter().enumerate();
        let (_, first) = lines
            .next()
            .ok_or_else(|| MatrixError::InvalidSourceData("no lines to build a matrix from".into()))?;
        let mut elements: Vec<char> = first.as_ref().chars().collect();
        let columns = elements.len();
        let mut rows = 1;

        for (line_index, line) in lines {
            let before = elements.len();
            elements.extend(line.as_ref().chars());
            let width = elements.len() - before;
            if width != columns {
                return Err(MatrixError::InvalidSourceData(format!(
                    "line {} has {} characters, expected {}",
                    line_index + 1,
                    width,
                    columns
                )));
            }
            rows += 1;
        }

        Matrix::from_elements(Size::new(columns as isize, rows), elements)
    }

    /// All characters of the view concatenated in row-major order.
    pub fn text(&self) -> String {
        self.iter().collect()
    }

    /// Parses [`text`](Self::text), typically a single-row run of digits.
    pub fn parse_number<N: FromStr>(&self) -> Result<N, N::Err> {
        self.text().parse()
    }

    /// Each row of the view as its own string.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.rows().map(|row| row.text())
    }
}

impl fmt::Display for Matrix<char> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(&line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::matrix::{Offset, View};

    #[test]
    fn test_from_lines_rejects_empty_input() {
        let lines: [&str; 0] = [];
        assert!(matches!(
            Matrix::from_lines(lines),
            Err(MatrixError::InvalidSourceData(_))
        ));
    }

    #[test]
    fn test_from_lines_rejects_ragged_lines() {
        let err = Matrix::from_lines(["abc", "de", "fgh"]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::InvalidSourceData("line 2 has 2 characters, expected 3".into())
        );
    }

    #[test]
    fn test_from_lines_counts_characters_not_bytes() {
        let m = Matrix::from_lines(["é·", "ab"]).unwrap();
        assert_eq!(m.size(), Size::new(2, 2));
        assert_eq!(m.at(Offset::new(1, 0)), &'·');
    }

    #[test]
    fn test_display_round_trips_lines() {
        let lines = ["#..", ".#.", "..#"];
        let m = Matrix::from_lines(lines).unwrap();
        assert_eq!(m.to_string(), lines.join("\n"));

        let corner = m.slice(View::new(Offset::new(1, 1), Size::new(2, 2)));
        assert_eq!(corner.to_string(), "#.\n.#");
        assert_eq!(corner.text(), "#..#");
    }

    #[test]
    fn test_parse_number_of_digit_run() {
        let m = Matrix::from_lines([".617*"]).unwrap();
        let run = m.slice(View::new(Offset::new(1, 0), Size::new(3, 1)));
        assert_eq!(run.parse_number::<u32>(), Ok(617));
        assert!(m.parse_number::<u32>().is_err());
    }
}
