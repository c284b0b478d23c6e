use crate::error::ReportError;
use crate::render::ReportRenderer;
use crate::stats::{Handler, Report};
use comfy_table::presets::ASCII_HORIZONTAL_ONLY;
use comfy_table::{Cell, CellAlignment, Table};
use std::io::Write;

const HEADERS: [&str; 4] = ["", "Handler", "Total", "Average Response Time"];
const NUMERIC_COLUMNS: [usize; 3] = [0, 2, 3];

/// Plain-text table, one row per report entry in report order.
#[derive(Debug, Default, Clone, Copy)]
pub struct TableRenderer;

impl TableRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn build_table(&self, report: &Report) -> Table {
        let mut table = Table::new();
        table.load_preset(ASCII_HORIZONTAL_ONLY).set_header(HEADERS);

        for entry in report {
            table.add_row(vec![
                Cell::new(entry.idx),
                Cell::new(entry.handler.as_ref().map(Handler::as_str).unwrap_or_default()),
                Cell::new(entry.total),
                Cell::new(entry.avg_response_time),
            ]);
        }

        for i in NUMERIC_COLUMNS {
            if let Some(column) = table.column_mut(i) {
                column.set_cell_alignment(CellAlignment::Right);
            }
        }

        table
    }
}

impl ReportRenderer for TableRenderer {
    fn render(&self, report: &Report, out: &mut dyn Write) -> Result<(), ReportError> {
        if report.is_empty() {
            return Err(ReportError::EmptyReport);
        }

        writeln!(out, "{}", self.build_table(report))
            .and_then(|()| out.flush())
            .map_err(|source| ReportError::Render { source })
    }
}
