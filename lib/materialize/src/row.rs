use rustc_hash::FxHashMap;

/// One row of tabular source data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    /// The position of the row in its table, starting at 0.
    pub index: usize,
    cells: FxHashMap<String, String>,
}

impl Row {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            cells: FxHashMap::default(),
        }
    }

    /// Creates a row by pairing column names with cell values.
    pub fn from_cells<C, V>(index: usize, cells: impl IntoIterator<Item = (C, V)>) -> Self
    where
        C: Into<String>,
        V: Into<String>,
    {
        Self {
            index,
            cells: cells
                .into_iter()
                .map(|(column, value)| (column.into(), value.into()))
                .collect(),
        }
    }

    #[must_use]
    pub fn with_cell(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(column, value);
        self
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.cells.insert(column.into(), value.into());
    }

    /// Returns the cell of `column`.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }
}
