use std::fmt::Display;
use std::io::{self, Write};

use super::Prox;
use crate::report::Table;
use crate::Float;

fn or_none<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| String::from("None"), |v| v.to_string())
}

impl<F: Float> Prox<F> {
    /// Snapshot of the current configuration as a two-column table.
    /// Fields that were never set are rendered as `None`.
    pub fn info_table(&self) -> Table {
        Table::new(["Proximal operator", self.kind.name()])
            .row(["Induced regularization", self.kind.regularization()])
            .row(["Penalization constant".to_string(), or_none(self.penalty_constant)])
            .row(["Start of apply range".to_string(), or_none(self.start())])
            .row(["End of apply range".to_string(), or_none(self.end())])
            .row(["Positivity constraint".to_string(), self.positive.to_string()])
    }

    /// Renders the configuration table into `writer`
    pub fn write_info<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write!(writer, "{}", self.info_table())
    }

    /// Displays information about the operator on stderr, not stdout. Never
    /// fails, even on an incomplete configuration.
    pub fn print_info(&self) {
        let stderr = io::stderr();
        let mut handle = stderr.lock();
        if let Err(err) = self.write_info(&mut handle) {
            log::warn!("[prox] could not print operator info: {}", err);
        }
    }
}
