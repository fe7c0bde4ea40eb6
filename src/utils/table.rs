//! Table rendering utilities for CLI outputs.

pub struct Column {
    pub header: String,
    /// 0 = no padding (last column).
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Header, a separator line drawn with `separator`, then the rows.
    /// Missing cells render empty.
    pub fn render(&self, separator: &str) -> String {
        let mut out = String::new();

        let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        self.push_line(&mut out, &header);

        let line_width: usize = self
            .columns
            .iter()
            .map(|c| c.width.max(c.header.chars().count()) + 1)
            .sum();
        let sep = separator.chars().next().unwrap_or('-');
        out.push_str(&sep.to_string().repeat(line_width));
        out.push('\n');

        for row in &self.rows {
            self.push_line(&mut out, row);
        }

        out
    }

    fn push_line(&self, out: &mut String, cells: &[String]) {
        let mut line = String::new();
        for (i, col) in self.columns.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            line.push_str(&format!("{:<width$} ", cell, width = col.width));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
}
