use std::fmt;


/// A plain-text table rendered with grid borders
///
/// The first row is the header and is separated from the body by a `=` rule,
/// every other row by a `-` rule. Cells are left-aligned and padded to the
/// width of their column:
/// ```text
/// +-------------------+-------+
/// | Proximal operator | L1    |
/// +===================+=======+
/// | Start             | 0     |
/// +-------------------+-------+
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates a table whose first row is `header`
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        Table {
            rows: vec![header.into_iter().map(|cell| cell.to_string()).collect()],
        }
    }

    /// Appends a body row
    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.rows.push(cells.into_iter().map(|cell| cell.to_string()).collect());
        self
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_columns(&self) -> usize {
        self.rows.iter().map(|row| row.len()).max().unwrap_or(0)
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths = vec![0; self.n_columns()];
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }
}

fn write_rule(f: &mut fmt::Formatter<'_>, widths: &[usize], fill: char) -> fmt::Result {
    for &width in widths {
        write!(f, "+{}", fill.to_string().repeat(width + 2))?;
    }
    writeln!(f, "+")
}

fn write_row(f: &mut fmt::Formatter<'_>, widths: &[usize], row: &[String]) -> fmt::Result {
    for (j, &width) in widths.iter().enumerate() {
        let cell = row.get(j).map(String::as_str).unwrap_or("");
        let padding = width - cell.chars().count();
        write!(f, "| {}{} ", cell, " ".repeat(padding))?;
    }
    writeln!(f, "|")
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();
        if widths.is_empty() {
            return Ok(());
        }
        write_rule(f, &widths, '-')?;
        for (i, row) in self.rows.iter().enumerate() {
            write_row(f, &widths, row)?;
            write_rule(f, &widths, if i == 0 { '=' } else { '-' })?;
        }
        Ok(())
    }
}
