use crate::components::ComponentId;
use crate::error::UserError;
use crate::models::Price;
use crate::widgets::shortcut::Shortcut;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    ClearScreen,
    Error(UserError),
    Focus(ComponentId),
    Unfocus,
    Shortcuts(Vec<Shortcut>),
    /// summary of the newly selected row, `None` when nothing is selected
    SelectionChanged(Option<String>),
    EditPrice { index: usize, price: Price },
    PriceEdited { index: usize, price: Price },
}
