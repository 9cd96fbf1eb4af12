use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

const DEFAULT_HL_COLOR: Color = Color::Indexed(130);

#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    Raw(Box<str>),
    Hl(Box<str>),
}

impl Fragment {
    #[inline]
    pub fn raw<S: Into<Box<str>>>(s: S) -> Self {
        Self::Raw(s.into())
    }

    #[inline]
    pub fn hl<S: Into<Box<str>>>(s: S) -> Self {
        Self::Hl(s.into())
    }
}

/// A key hint shown in the footer, e.g. `[e]dit price`
#[derive(Debug, Clone, PartialEq)]
pub struct Shortcut {
    parts: Vec<Fragment>,
}

impl Shortcut {
    pub fn new(parts: Vec<Fragment>) -> Self {
        Self { parts }
    }

    pub fn spans(&self, hl_style: Option<Style>) -> Vec<Span<'_>> {
        let hl_style = hl_style.unwrap_or(Style::default().fg(DEFAULT_HL_COLOR));
        self.parts
            .iter()
            .filter_map(|v| match v {
                Fragment::Raw(s) if !s.is_empty() => Some(Span::raw(s.as_ref())),
                Fragment::Hl(s) if !s.is_empty() => Some(Span::styled(s.as_ref(), hl_style)),
                _ => None,
            })
            .collect()
    }
}

impl<'a> From<&'a Shortcut> for Line<'a> {
    fn from(value: &'a Shortcut) -> Self {
        Line::from(value.spans(None))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_to_line() {
        let sc = Shortcut::new(vec![Fragment::hl("e"), Fragment::raw("dit"), Fragment::raw("")]);
        let line = Line::from(&sc);
        assert_eq!(line.spans.len(), 2);

        assert_eq!(line.spans[0].content, "e");
        assert_eq!(line.spans[0].style.fg, Some(DEFAULT_HL_COLOR));

        assert_eq!(line.spans[1].content, "dit");
        assert_eq!(line.spans[1].style.fg, None);
    }
}
