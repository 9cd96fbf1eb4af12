use std::borrow::Cow;

use ratatui::layout::{Alignment, Constraint};
use ratatui::text::Line;

/// How a column claims horizontal space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColWidth {
    /// takes whatever is left after the other columns
    Fill,
    /// as wide as the widest of the header and every cell
    AllCells,
}

pub struct ColDef<T> {
    /// column identifier, also the name the sort handler resolves
    pub id: &'static str,
    pub title: &'static str,
    pub width: ColWidth,
    pub alignment: Alignment,
    /// value accessor, used in cell rendering and width measuring
    pub accessor: for<'a> fn(&'a T) -> Cow<'a, str>,
}

impl<T> ColDef<T> {
    /// Cell content with this column's alignment applied
    pub fn cell<'a>(&self, item: &'a T) -> Line<'a> {
        Line::from((self.accessor)(item)).alignment(self.alignment)
    }

    /// Widest content in this column; `header_extra` is room reserved next to the title
    pub fn content_width(&self, records: &[T], header_extra: u16) -> u16 {
        let header = Line::from(self.title).width() as u16 + header_extra;
        records
            .iter()
            .map(|item| Line::from((self.accessor)(item)).width() as u16)
            .fold(header, u16::max)
    }

    pub fn constraint(&self, records: &[T], header_extra: u16) -> Constraint {
        match self.width {
            ColWidth::Fill => Constraint::Fill(1),
            ColWidth::AllCells => Constraint::Length(self.content_width(records, header_extra)),
        }
    }
}

pub fn constraints<T>(cols: &[ColDef<T>], records: &[T], header_extra: u16) -> Vec<Constraint> {
    cols.iter().map(|col| col.constraint(records, header_extra)).collect()
}
