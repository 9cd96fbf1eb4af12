use anyhow::Result;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::action::Action;
use crate::components::{Component, ComponentId};

pub const APP_TITLE: &str = "Destinations";

/// Title bar, mirrors the window title: the summary of the selected row.
#[derive(Debug, Default)]
pub struct TitleComponent {
    summary: Option<String>,
}

impl TitleComponent {
    fn title_line(&self) -> Line<'_> {
        let mut spans = vec![Span::styled(APP_TITLE, Style::default().fg(Color::Cyan).bold())];
        if let Some(summary) = &self.summary {
            spans.push(Span::raw(" - "));
            spans.push(Span::raw(summary.as_str()));
        }
        Line::from(spans)
    }

    fn version_line(&self) -> Line<'_> {
        Line::from(Span::styled(
            concat!("v", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Right)
    }
}

impl Component for TitleComponent {
    fn id(&self) -> ComponentId {
        ComponentId::Title
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if let Action::SelectionChanged(summary) = action {
            self.summary = summary;
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let [left, right] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(12)]).areas(area);
        frame.render_widget(self.title_line(), left);
        frame.render_widget(self.version_line(), right);
        Ok(())
    }
}
