//! Table formatting.

use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table as ComfyTable, presets};

/// Table builder for formatted output.
pub struct Table {
    inner: ComfyTable,
    colors_enabled: bool,
}

impl Table {
    /// Create a table styled for the current terminal.
    pub fn new() -> Self {
        let colors_enabled = crate::output::colors_enabled();
        let mut table = ComfyTable::new();
        if colors_enabled {
            table.load_preset(presets::UTF8_BORDERS_ONLY);
        } else {
            table.load_preset(presets::ASCII_BORDERS_ONLY_CONDENSED);
        }
        table.set_content_arrangement(ContentArrangement::Dynamic);
        Self {
            inner: table,
            colors_enabled,
        }
    }

    /// Set the table headers.
    pub fn headers<I, T>(&mut self, headers: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let cells: Vec<Cell> = headers
            .into_iter()
            .map(|h| {
                let cell = Cell::new(h.as_ref());
                if self.colors_enabled {
                    cell.add_attribute(Attribute::Bold).fg(Color::Cyan)
                } else {
                    cell
                }
            })
            .collect();
        self.inner.set_header(cells);
        self
    }

    /// Add a row.
    pub fn row<I, T>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.inner
            .add_row(values.into_iter().map(|v| Cell::new(v.as_ref())));
        self
    }

    /// Print the table to stdout.
    pub fn print(&self) {
        println!("{}", self.inner);
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("colors_enabled", &self.colors_enabled)
            .finish_non_exhaustive()
    }
}
