use anyhow::Result;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};

use crate::action::Action;
use crate::components::{Component, ComponentId};
use crate::error::UserError;
use crate::widgets::shortcut::{Fragment, Shortcut};

/// ticks an error stays visible
const ERROR_TTL: u16 = 12;

#[derive(Debug)]
pub struct FooterComponent {
    shortcuts: Vec<Shortcut>,
    error: Option<(UserError, u16)>,
}

fn default_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut::new(vec![Fragment::hl("?"), Fragment::raw(" help")]),
        Shortcut::new(vec![Fragment::hl("q"), Fragment::raw("uit")]),
    ]
}

impl Default for FooterComponent {
    fn default() -> Self {
        Self { shortcuts: default_shortcuts(), error: None }
    }
}

impl FooterComponent {
    fn line(&self) -> Line<'_> {
        if let Some((err, _)) = &self.error {
            return Line::from(vec![
                Span::styled(err.title, Style::default().fg(Color::Red).bold()),
                Span::raw(": "),
                Span::styled(err.message.as_ref(), Color::Red),
            ]);
        }

        let mut spans = vec![];
        for shortcut in &self.shortcuts {
            spans.push(Span::raw("[").fg(Color::DarkGray));
            spans.extend(shortcut.spans(None));
            spans.push(Span::raw("]  ").fg(Color::DarkGray));
        }
        Line::from(spans)
    }
}

impl Component for FooterComponent {
    fn id(&self) -> ComponentId {
        ComponentId::Footer
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Shortcuts(shortcuts) => {
                let mut sc = default_shortcuts();
                sc.extend(shortcuts);
                self.shortcuts = sc;
            }
            Action::Error(err) => self.error = Some((err, ERROR_TTL)),
            Action::Tick => {
                if let Some((_, ttl)) = &mut self.error {
                    *ttl = ttl.saturating_sub(1);
                    if *ttl == 0 {
                        self.error = None;
                    }
                }
            }
            _ => (),
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(self.line(), area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_shortcuts_line() {
        let mut footer = FooterComponent::default();
        let edit = Shortcut::new(vec![Fragment::hl("e"), Fragment::raw("dit")]);
        footer.update(Action::Shortcuts(vec![edit])).unwrap();
        assert_eq!(footer.line().to_string(), "[? help]  [quit]  [edit]  ");
    }

    #[test]
    fn test_error_expires() {
        let mut footer = FooterComponent::default();
        let err = UserError::from(("Invalid price", "price is empty".to_owned()));
        footer.update(Action::Error(err)).unwrap();
        assert_eq!(footer.line().to_string(), "Invalid price: price is empty");

        for _ in 0..ERROR_TTL {
            footer.update(Action::Tick).unwrap();
        }
        assert_eq!(footer.line().to_string(), "[? help]  [quit]  ");
    }
}
