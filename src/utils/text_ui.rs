use const_format::concatcp;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::symbols::line::{TOP_LEFT, TOP_RIGHT};
use ratatui::text::{Line, Span};

pub const TOP_TITLE_LEFT: &str = concatcp!(TOP_RIGHT, " ");
pub const TOP_TITLE_RIGHT: &str = concatcp!(" ", TOP_LEFT);

pub fn top_title_line<S: Into<Style>>(title: &'_ str, title_style: S) -> Line<'_> {
    Line::from(vec![
        Span::raw(TOP_TITLE_LEFT),
        Span::styled(title, title_style),
        Span::raw(TOP_TITLE_RIGHT),
    ])
}

/// Centered area taking a percentage of `area`
pub fn popup_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    centered(area, Constraint::Percentage(percent_x), Constraint::Percentage(percent_y))
}

/// Centered area of a fixed size, clamped to `area`
pub fn popup_fixed(area: Rect, width: u16, height: u16) -> Rect {
    centered(area, Constraint::Length(width), Constraint::Length(height))
}

fn centered(area: Rect, horizontal: Constraint, vertical: Constraint) -> Rect {
    let [area] = Layout::vertical([vertical]).flex(Flex::Center).areas(area);
    let [area] = Layout::horizontal([horizontal]).flex(Flex::Center).areas(area);
    area
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_popup_fixed() {
        let popup = popup_fixed(Rect::new(0, 0, 80, 20), 40, 4);
        assert_eq!(popup, Rect::new(20, 8, 40, 4));
        // clamped
        assert_eq!(popup_fixed(Rect::new(0, 0, 10, 2), 40, 3), Rect::new(0, 0, 10, 2));
    }

    #[test]
    fn test_top_title_line() {
        let line = top_title_line("destinations", Style::default());
        assert_eq!(line.to_string(), format!("{TOP_TITLE_LEFT}destinations{TOP_TITLE_RIGHT}"));
    }
}
