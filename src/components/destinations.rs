use std::borrow::Cow;

use ratatui::layout::Alignment;
use tracing::debug;

use crate::models::sort::{HeaderSort, SortField, SortSpec};
use crate::models::{Destination, Price};
use crate::utils::columns::{ColDef, ColWidth};

/// The list bound to the grid, together with the header sort state that reorders it.
#[derive(Debug, Default)]
pub struct Destinations {
    records: Vec<Destination>,
    sort: HeaderSort,
}

impl Destinations {
    pub fn new(records: Vec<Destination>) -> Self {
        Self { records, sort: HeaderSort::default() }
    }

    pub fn push(&mut self, record: Destination) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Destination> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[Destination] {
        &self.records
    }

    pub fn sort_state(&self) -> Option<SortSpec> {
        self.sort.current()
    }

    /// Header click on `field`: update the direction state, then stable sort every record.
    pub fn sort_by(&mut self, field: SortField) -> SortSpec {
        let spec = self.sort.click(field);
        debug!("sorting {} destinations by {:?}", self.records.len(), spec);
        self.records.sort_by(|a, b| spec.ordering(a, b));
        spec
    }

    /// Sort by a column id such as `"Price"`. Unknown ids change nothing.
    pub fn sort_by_column(&mut self, column: &str) -> Option<SortSpec> {
        match column.parse::<SortField>() {
            Ok(field) => Some(self.sort_by(field)),
            Err(_) => {
                debug!("column `{column}` is not sortable, ignored");
                None
            }
        }
    }

    /// Sort by the header at `index` in [`DESTINATION_COLS`]. Out of range indices change nothing.
    pub fn sort_by_index(&mut self, index: usize) -> Option<SortSpec> {
        let col = DESTINATION_COLS.get(index)?;
        self.sort_by_column(col.id)
    }

    /// Writes the edited price cell; the list keeps its current order.
    pub fn set_price(&mut self, index: usize, price: Price) -> bool {
        match self.records.get_mut(index) {
            Some(record) => {
                debug!("price of `{}` changed: {} -> {}", record.name, record.price, price);
                record.price = price;
                true
            }
            None => false,
        }
    }
}

pub static DESTINATION_COLS: &[ColDef<Destination>] = &[
    ColDef {
        id: "Name",
        title: "Name",
        width: ColWidth::Fill,
        alignment: Alignment::Left,
        accessor: |d: &Destination| Cow::Borrowed(d.name.as_str()),
    },
    ColDef {
        id: "Distance",
        title: "Distance",
        width: ColWidth::AllCells,
        alignment: Alignment::Right,
        accessor: |d: &Destination| Cow::Owned(d.distance.to_string()),
    },
    ColDef {
        id: "Price",
        title: "Price",
        width: ColWidth::AllCells,
        alignment: Alignment::Right,
        accessor: |d: &Destination| Cow::Owned(d.price.to_fixed()),
    },
];
