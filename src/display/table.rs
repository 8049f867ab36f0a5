//! Table renderer: a small row/cell model with column spans, drawn with
//! comfy-table.
//!
//! Two layouts exist. `Detail` is a headerless label/value table for one
//! resource; `List` has a fixed header and one row per element. An empty
//! table always renders a single centered `none` row spanning every column.

use crate::display::format::{Style, Styled, NONE};
use crate::display::RenderOptions;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell as TableCell, CellAlignment, Table};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl From<Align> for CellAlignment {
    fn from(align: Align) -> Self {
        match align {
            Align::Left => CellAlignment::Left,
            Align::Center => CellAlignment::Center,
            Align::Right => CellAlignment::Right,
        }
    }
}

/// One already-painted cell. `span` is the number of columns it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub content: String,
    pub span: usize,
    pub align: Align,
}

impl Cell {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            span: 1,
            align: Align::Left,
        }
    }

    pub fn spanning(content: impl Into<String>, span: usize) -> Self {
        Self {
            span: span.max(1),
            ..Self::new(content)
        }
    }

    pub fn aligned(mut self, align: Align) -> Self {
        self.align = align;
        self
    }
}

pub type Row = Vec<Cell>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    Detail,
    List(Vec<String>),
}

/// Width of the label/value layout.
const DETAIL_COLUMNS: usize = 2;

#[derive(Debug, Clone)]
pub struct TableView {
    layout: Layout,
    rows: Vec<Row>,
    opts: RenderOptions,
}

impl TableView {
    /// Two-column label/value table for a single resource.
    pub fn detail(opts: &RenderOptions) -> Self {
        Self {
            layout: Layout::Detail,
            rows: Vec::new(),
            opts: *opts,
        }
    }

    /// Multi-column table with a fixed header.
    pub fn list(header: &[&str], opts: &RenderOptions) -> Self {
        Self {
            layout: Layout::List(header.iter().map(|h| h.to_string()).collect()),
            rows: Vec::new(),
            opts: *opts,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn header(&self) -> Option<&[String]> {
        match &self.layout {
            Layout::Detail => None,
            Layout::List(header) => Some(header),
        }
    }

    /// Number of columns every row must fill.
    pub fn width(&self) -> usize {
        match &self.layout {
            Layout::Detail => DETAIL_COLUMNS,
            Layout::List(header) => header.len(),
        }
    }

    /// Add a list row; one cell per value.
    pub fn push_row(&mut self, values: Vec<Styled>) {
        let row = values
            .iter()
            .map(|value| Cell::new(self.opts.paint(value)))
            .collect();
        self.rows.push(row);
    }

    /// Add a label/value row. Labels are always shown in the label style.
    pub fn push_field(&mut self, label: &str, value: impl Into<Styled>) {
        let label = self.opts.paint(&Styled::new(label, Style::LABEL));
        let value = self.opts.paint(&value.into());
        self.rows.push(vec![Cell::new(label), Cell::new(value)]);
    }

    /// Add a row made of one cell covering every column, assembled from
    /// differently styled fragments.
    pub fn push_spanning(&mut self, fragments: &[Styled]) {
        let content: String = fragments.iter().map(|f| self.opts.paint(f)).collect();
        let width = self.width();
        self.rows.push(vec![Cell::spanning(content, width)]);
    }

    /// Rows as they will be drawn: the pushed rows, or the placeholder row
    /// when nothing was pushed.
    pub fn rows(&self) -> Vec<Row> {
        if self.rows.is_empty() {
            vec![vec![Cell::spanning(NONE, self.width()).aligned(Align::Center)]]
        } else {
            self.rows.clone()
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.rows.is_empty()
    }

    /// Draw the table. comfy-table has no column spans, so a spanning cell
    /// occupies its first column and the covered columns are left blank.
    pub fn render(&self) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        if let Some(header) = self.header() {
            let header: Vec<TableCell> = header
                .iter()
                .map(|h| TableCell::new(self.opts.paint(&Styled::new(h.as_str(), Style::LABEL))))
                .collect();
            table.set_header(header);
        }
        for row in self.rows() {
            let mut cells: Vec<TableCell> = Vec::with_capacity(self.width());
            for cell in row {
                cells.push(TableCell::new(&cell.content).set_alignment(cell.align.into()));
                for _ in 1..cell.span {
                    cells.push(TableCell::new(""));
                }
            }
            table.add_row(cells);
        }
        table.to_string()
    }
}
