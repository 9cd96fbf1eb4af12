use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Layout, Position, Rect};
use ratatui::prelude::{Color, Line, Modifier, Span, Style};
use ratatui::widgets::{Block, BorderType, Cell, Row, Table, TableState};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info};

use crate::action::Action;
use crate::components::destinations::{DESTINATION_COLS, Destinations};
use crate::components::{Component, ComponentId};
use crate::models::Destination;
use crate::models::sort::{SortDir, SortSpec};
use crate::utils::columns;
use crate::utils::symbols::{arrow, triangle};
use crate::utils::text_ui::{TOP_TITLE_LEFT, TOP_TITLE_RIGHT};
use crate::widgets::shortcut::{Fragment, Shortcut};

const COLUMN_SPACING: u16 = 2;
/// room after each header title for the sort marker
const HEADER_EXTRA: u16 = 2;
/// header line plus its bottom margin
const HEADER_HEIGHT: u16 = 2;

/// The window's grid: renders [`Destinations`], sorts on header clicks and reports the selection.
pub struct GridComponent {
    store: Destinations,
    row_height: u16,
    table_state: TableState,
    header_focus: usize,
    last_summary: Option<String>,

    // areas from the last draw, for mouse hit testing
    header_cells: Vec<Rect>,
    body: Rect,

    action_tx: Option<UnboundedSender<Action>>,
}

impl GridComponent {
    pub fn new(row_height: u16) -> Self {
        Self {
            store: Destinations::new(Vec::new()),
            row_height: row_height.max(1),
            table_state: TableState::default(),
            header_focus: 0,
            last_summary: None,
            header_cells: Vec::new(),
            body: Rect::default(),
            action_tx: None,
        }
    }

    fn seed(&mut self) -> Result<()> {
        Destination::samples().into_iter().for_each(|d| self.store.push(d));
        info!("Seeded {} destinations", self.store.len());
        self.select(Some(0))
    }

    fn selected(&self) -> Option<usize> {
        self.table_state.selected()
    }

    fn select(&mut self, index: Option<usize>) -> Result<()> {
        let index = match index {
            Some(_) if self.store.is_empty() => None,
            Some(i) => Some(i.min(self.store.len() - 1)),
            None => None,
        };
        self.table_state.select(index);
        self.notify_selection()
    }

    /// Sends the summary of the selected record when it differs from the last one sent.
    fn notify_selection(&mut self) -> Result<()> {
        let summary = self.selected().and_then(|i| self.store.get(i)).map(Destination::to_string);
        if summary == self.last_summary {
            return Ok(());
        }
        debug!("selection changed: {summary:?}");
        self.last_summary = summary.clone();
        if let Some(tx) = &self.action_tx {
            tx.send(Action::SelectionChanged(summary))?;
        }
        Ok(())
    }

    fn page_size(&self) -> usize {
        (self.body.height / self.row_height).max(1) as usize
    }

    fn select_next(&mut self, step: usize) -> Result<()> {
        let next = self.selected().map_or(0, |i| i.saturating_add(step));
        self.select(Some(next))
    }

    fn select_prev(&mut self, step: usize) -> Result<()> {
        let prev = self.selected().map_or(0, |i| i.saturating_sub(step));
        self.select(Some(prev))
    }

    fn click_header(&mut self, index: usize) -> Result<()> {
        if let Some(spec) = self.store.sort_by_index(index) {
            info!("Sorted by {:?} {:?}", spec.field, spec.dir);
            self.header_focus = index;
            self.notify_selection()?;
        }
        Ok(())
    }

    fn header_at(&self, column: u16, row: u16) -> Option<usize> {
        let pos = Position::new(column, row);
        self.header_cells.iter().position(|cell| cell.contains(pos))
    }

    fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        if !self.body.contains(Position::new(column, row)) {
            return None;
        }
        let index = self.table_state.offset() + ((row - self.body.y) / self.row_height) as usize;
        (index < self.store.len()).then_some(index)
    }

    fn sort_marker(sort: Option<SortSpec>, id: &str) -> &'static str {
        match sort {
            Some(spec) if <&'static str>::from(spec.field) == id => match spec.dir {
                SortDir::Asc => triangle::UP_SMALL,
                SortDir::Desc => triangle::DOWN_SMALL,
            },
            _ => " ",
        }
    }

    fn render_table(&mut self, frame: &mut Frame, area: Rect) {
        let title_line = Line::from(vec![
            Span::raw(TOP_TITLE_LEFT),
            Span::raw("destinations ("),
            Span::styled(
                self.selected().map(|i| (i + 1).to_string()).unwrap_or("-".into()),
                Color::LightCyan,
            ),
            Span::raw("/"),
            Span::styled(self.store.len().to_string(), Color::Cyan),
            Span::raw(")"),
            Span::raw(TOP_TITLE_RIGHT),
        ]);
        let block = Block::bordered().border_type(BorderType::Rounded).title(title_line);

        // same split the table does, kept for hit testing
        let inner = block.inner(area);
        let widths = columns::constraints(DESTINATION_COLS, self.store.records(), HEADER_EXTRA);
        let header_row = Rect { height: inner.height.min(1), ..inner };
        self.header_cells =
            Layout::horizontal(widths.clone()).spacing(COLUMN_SPACING).split(header_row).to_vec();
        self.body = Rect {
            y: inner.y.saturating_add(HEADER_HEIGHT),
            height: inner.height.saturating_sub(HEADER_HEIGHT),
            ..inner
        };

        let sort = self.store.sort_state();
        let header = DESTINATION_COLS
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let mut title_style = Style::default().bold();
                if i == self.header_focus {
                    title_style = title_style.underlined();
                }
                let line = Line::from(vec![
                    Span::styled(col.title, title_style),
                    Span::raw(" "),
                    Span::styled(Self::sort_marker(sort, col.id), Color::LightCyan),
                ]);
                Cell::from(line.alignment(col.alignment))
            })
            .collect::<Row>()
            .height(1)
            .bottom_margin(HEADER_HEIGHT - 1);
        let selected_row_style = Style::default().add_modifier(Modifier::REVERSED).fg(Color::Cyan);

        let rows: Vec<Row> = self
            .store
            .records()
            .iter()
            .map(|item| {
                Row::new(DESTINATION_COLS.iter().map(|col| Cell::from(col.cell(item))))
                    .height(self.row_height)
            })
            .collect();
        let table = Table::new(rows, widths)
            .block(block)
            .header(header)
            .column_spacing(COLUMN_SPACING)
            .row_highlight_style(selected_row_style);

        frame.render_stateful_widget(table, area, &mut self.table_state);
    }
}

impl Component for GridComponent {
    fn id(&self) -> ComponentId {
        ComponentId::Grid
    }

    fn shortcuts(&self) -> Vec<Shortcut> {
        vec![
            Shortcut::new(vec![
                Fragment::hl(arrow::UP),
                Fragment::raw(" row "),
                Fragment::hl(arrow::DOWN),
            ]),
            Shortcut::new(vec![
                Fragment::hl(arrow::LEFT),
                Fragment::raw(" column "),
                Fragment::hl(arrow::RIGHT),
            ]),
            Shortcut::new(vec![Fragment::hl("s"), Fragment::raw("ort / click header")]),
            Shortcut::new(vec![Fragment::hl("e"), Fragment::raw("dit price")]),
        ]
    }

    fn init(&mut self) -> Result<()> {
        self.seed()
    }

    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        self.action_tx = Some(tx);
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.select_next(1)?,
            KeyCode::Char('k') | KeyCode::Up => self.select_prev(1)?,
            KeyCode::Char('g') => self.select(Some(0))?,
            KeyCode::Char('G') => self.select(Some(usize::MAX))?,
            KeyCode::PageDown | KeyCode::Char(' ') => self.select_next(self.page_size())?,
            KeyCode::PageUp => self.select_prev(self.page_size())?,
            KeyCode::Left => self.header_focus = self.header_focus.saturating_sub(1),
            KeyCode::Right => {
                self.header_focus = (self.header_focus + 1).min(DESTINATION_COLS.len() - 1)
            }
            KeyCode::Enter | KeyCode::Char('s') => self.click_header(self.header_focus)?,
            KeyCode::Char(c @ '1'..='9') => self.click_header(c as usize - '1' as usize)?,
            KeyCode::Char('e') => {
                if let Some(index) = self.selected()
                    && let Some(record) = self.store.get(index)
                {
                    return Ok(Some(Action::EditPrice { index, price: record.price }));
                }
            }
            _ => (),
        }
        Ok(None)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = self.header_at(mouse.column, mouse.row) {
                    self.click_header(index)?;
                } else if let Some(index) = self.row_at(mouse.column, mouse.row) {
                    self.select(Some(index))?;
                }
            }
            MouseEventKind::ScrollDown => self.select_next(1)?,
            MouseEventKind::ScrollUp => self.select_prev(1)?,
            _ => (),
        }
        Ok(None)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if let Action::PriceEdited { index, price } = action
            && self.store.set_price(index, price)
        {
            self.notify_selection()?;
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.render_table(frame, area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use tokio::sync::mpsc::{self, UnboundedReceiver};

    use super::*;
    use crate::models::Price;

    type Fixture = (GridComponent, UnboundedReceiver<Action>, Terminal<TestBackend>);

    fn setup(row_height: u16) -> Fixture {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut grid = GridComponent::new(row_height);
        grid.register_action_handler(tx).unwrap();
        grid.init().unwrap();
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        draw(&mut grid, &mut terminal);
        (grid, rx, terminal)
    }

    fn draw(grid: &mut GridComponent, terminal: &mut Terminal<TestBackend>) {
        terminal
            .draw(|frame| {
                let area = frame.area();
                grid.draw(frame, area).unwrap();
            })
            .unwrap();
    }

    fn titles(rx: &mut UnboundedReceiver<Action>) -> Vec<Option<String>> {
        let mut v = vec![];
        while let Ok(action) = rx.try_recv() {
            if let Action::SelectionChanged(summary) = action {
                v.push(summary);
            }
        }
        v
    }

    fn click(grid: &mut GridComponent, column: u16, row: u16) {
        let event = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };
        grid.handle_mouse_event(event).unwrap();
    }

    fn key(grid: &mut GridComponent, code: KeyCode) -> Option<Action> {
        grid.handle_key_event(KeyEvent::from(code)).unwrap()
    }

    fn line(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buf = terminal.backend().buffer();
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_first_row_selected_on_init() {
        let (grid, mut rx, _) = setup(1);
        assert_eq!(grid.selected(), Some(0));
        assert_eq!(titles(&mut rx), vec![Some("London - VIP 100 km 1200 $".to_owned())]);
    }

    #[test]
    fn test_auto_sized_columns() {
        let (grid, _, _) = setup(1);
        // inner width 58: Distance "Distance" + marker, Price "1200.00", Name fills the rest
        let widths: Vec<u16> = grid.header_cells.iter().map(|r| r.width).collect();
        assert_eq!(widths, vec![37, 10, 7]);
        assert_eq!(grid.header_cells[0].y, 1);
        assert_eq!(grid.body.y, 3);
    }

    #[test]
    fn test_header_click_sorts_and_toggles() {
        let (mut grid, mut rx, mut terminal) = setup(1);
        titles(&mut rx);

        let distance = grid.header_cells[1];
        click(&mut grid, distance.x + 1, distance.y);
        let order: Vec<u32> = grid.store.records().iter().map(|d| d.distance).collect();
        assert_eq!(order, vec![100, 150, 200, 400]);
        // London stays on the selected row, title unchanged
        assert_eq!(titles(&mut rx), Vec::<Option<String>>::new());

        draw(&mut grid, &mut terminal);
        assert!(line(&terminal, 1).contains("Distance ▴"), "{}", line(&terminal, 1));

        click(&mut grid, distance.x + 1, distance.y);
        let order: Vec<u32> = grid.store.records().iter().map(|d| d.distance).collect();
        assert_eq!(order, vec![400, 200, 150, 100]);
        assert_eq!(titles(&mut rx), vec![Some("Berlin 400 km 800 $".to_owned())]);

        draw(&mut grid, &mut terminal);
        assert!(line(&terminal, 1).contains("Distance ▾"), "{}", line(&terminal, 1));
    }

    #[test]
    fn test_click_outside_headers_is_noop() {
        let (mut grid, _, _) = setup(1);
        let before = grid.store.records().to_vec();
        // the border and the gap between header cells
        click(&mut grid, 0, 1);
        let gap = grid.header_cells[0].right();
        click(&mut grid, gap, 1);
        assert_eq!(grid.store.records(), before.as_slice());
        assert_eq!(grid.store.sort_state(), None);
    }

    #[test]
    fn test_row_click_selects() {
        let (mut grid, mut rx, _) = setup(2);
        titles(&mut rx);

        // rows are 2 lines tall, the third row starts at body.y + 4
        let body = grid.body;
        click(&mut grid, body.x + 2, body.y + 5);
        assert_eq!(grid.selected(), Some(2));
        assert_eq!(titles(&mut rx), vec![Some("Paris 200 km 400 $".to_owned())]);

        // below the last row
        click(&mut grid, body.x + 2, body.y + 8);
        assert_eq!(grid.selected(), Some(2));
    }

    #[test]
    fn test_keyboard_navigation_and_sort() {
        let (mut grid, mut rx, _) = setup(1);
        titles(&mut rx);

        key(&mut grid, KeyCode::Down);
        key(&mut grid, KeyCode::Down);
        key(&mut grid, KeyCode::Char('G'));
        assert_eq!(grid.selected(), Some(3));
        key(&mut grid, KeyCode::Down);
        assert_eq!(grid.selected(), Some(3));
        assert_eq!(
            titles(&mut rx),
            vec![
                Some("Berlin 400 km 800 $".to_owned()),
                Some("Paris 200 km 400 $".to_owned()),
                Some("Madrid 150 km 300 $".to_owned()),
            ]
        );

        // focus Price and "click" it
        key(&mut grid, KeyCode::Right);
        key(&mut grid, KeyCode::Right);
        key(&mut grid, KeyCode::Right);
        assert_eq!(grid.header_focus, 2);
        key(&mut grid, KeyCode::Char('s'));
        let names: Vec<&str> = grid.store.records().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Madrid", "Paris", "Berlin", "London - VIP"]);
        assert_eq!(titles(&mut rx), vec![Some("London - VIP 100 km 1200 $".to_owned())]);

        // number keys click headers directly, out of range ones do nothing
        key(&mut grid, KeyCode::Char('1'));
        assert_eq!(grid.header_focus, 0);
        key(&mut grid, KeyCode::Char('9'));
        assert_eq!(grid.header_focus, 0);
        assert_eq!(grid.store.sort_state().map(|s| s.dir), Some(SortDir::Asc));
    }

    #[test]
    fn test_edit_price() {
        let (mut grid, mut rx, _) = setup(1);
        titles(&mut rx);

        key(&mut grid, KeyCode::Down);
        titles(&mut rx);
        let action = key(&mut grid, KeyCode::Char('e'));
        assert_eq!(action, Some(Action::EditPrice { index: 1, price: Price::from_units(800) }));

        grid.update(Action::PriceEdited { index: 1, price: Price::from_cents(79950) }).unwrap();
        assert_eq!(grid.store.get(1).unwrap().price, Price::from_cents(79950));
        assert_eq!(titles(&mut rx), vec![Some("Berlin 400 km 799.50 $".to_owned())]);
    }
}
