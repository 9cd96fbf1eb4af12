use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph};

use super::{Component, ComponentId};
use crate::action::Action;
use crate::utils::text_ui::{popup_area, top_title_line};

#[derive(Debug, Default)]
pub struct HelpComponent {
    config_path: String,
    scroll: u16,
}

enum HelpRow<'a> {
    Empty,
    Title(Line<'a>),
    Entry { left: Span<'a>, right: Span<'a> },
}

impl<'a> HelpRow<'a> {
    fn key_title(s: impl Into<Span<'a>>) -> Self {
        Self::Title(Line::from(vec!["--- ".into(), s.into().italic().bold(), " ---".into()]))
    }

    fn entry(left: impl Into<Span<'a>>, right: impl Into<Span<'a>>) -> Self {
        Self::Entry { left: left.into(), right: right.into() }
    }
}

impl HelpComponent {
    pub fn new(config_path: String) -> Self {
        Self { config_path, scroll: 0 }
    }

    fn rows(&self) -> Vec<HelpRow<'_>> {
        vec![
            HelpRow::Empty,
            HelpRow::entry(Span::raw("Configuration").bold(), format!("'{}'", self.config_path)),
            HelpRow::entry(Span::raw("Version").bold(), env!("CARGO_PKG_VERSION")),
            HelpRow::Empty,
            HelpRow::entry(Span::raw("Key").bold(), Span::raw("Description").bold()),
            HelpRow::key_title("common"),
            HelpRow::entry("?", "toggle help"),
            HelpRow::entry("q / Ctrl+c", "quit"),
            HelpRow::entry("Ctrl+z", "suspend"),
            HelpRow::Empty,
            HelpRow::key_title("grid"),
            HelpRow::entry("k / Up, j / Down", "select row"),
            HelpRow::entry("g, G", "first, last row"),
            HelpRow::entry("PageUp, Space / PageDown", "page up, down"),
            HelpRow::entry("Left, Right", "move header focus"),
            HelpRow::entry("s / Enter, click header", "sort by column, again to reverse"),
            HelpRow::entry("1, 2, 3", "sort by Name, Distance, Price"),
            HelpRow::entry("e", "edit price of selected row"),
            HelpRow::Empty,
            HelpRow::key_title("price editor"),
            HelpRow::entry("Enter", "apply"),
            HelpRow::entry("Esc", "cancel"),
        ]
    }

    fn lines(&self, gap: u16, center: u16) -> Vec<Line<'_>> {
        self.rows()
            .into_iter()
            .map(|row| match row {
                HelpRow::Empty => Line::raw(""),
                HelpRow::Title(title) => {
                    let pad_left = center.saturating_sub(title.width() as u16 / 2);
                    let mut spans = vec![" ".repeat(pad_left as usize).into()];
                    spans.extend(title.spans);
                    Line::from(spans)
                }
                HelpRow::Entry { left, right } => {
                    // right-align the key column on `center`
                    let pad_left =
                        center.saturating_sub(left.width() as u16).saturating_sub(gap / 2);
                    Line::from(vec![
                        " ".repeat(pad_left as usize).into(),
                        left,
                        " ".repeat(gap as usize).into(),
                        right,
                    ])
                }
            })
            .collect()
    }
}

impl Component for HelpComponent {
    fn id(&self) -> ComponentId {
        ComponentId::Help
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(Some(Action::Quit));
            }
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?') => {
                self.scroll = 0;
                return Ok(Some(Action::Unfocus));
            }
            KeyCode::Char('j') | KeyCode::Down => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            _ => (),
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let area = popup_area(area, 80, 80);
        frame.render_widget(Clear, area);

        let border = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Color::LightBlue)
            .title(top_title_line("help", Color::LightBlue));
        let inner = border.inner(area);
        frame.render_widget(border, area);

        let gap = 4;
        let center_x = (inner.width as f32 * 0.4) as u16;
        let total = self.rows().len() as u16;
        self.scroll = self.scroll.min(total.saturating_sub(inner.height));
        let lines = self.lines(gap, center_x);
        frame.render_widget(Paragraph::new(lines).scroll((self.scroll, 0)), inner);

        Ok(())
    }
}
