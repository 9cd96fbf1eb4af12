use anyhow::{Result, anyhow};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};
use tui_input::{Input, InputRequest};

use crate::action::Action;
use crate::components::{Component, ComponentId};
use crate::error::UserError;
use crate::models::Price;
use crate::utils::text_ui::{popup_fixed, top_title_line};
use crate::widgets::shortcut::{Fragment, Shortcut};

/// Inline editor for the only writable cell of the grid, the price.
#[derive(Debug, Default)]
pub struct PriceEditorComponent {
    index: Option<usize>,
    input: Input,
    action_tx: Option<UnboundedSender<Action>>,
}

impl PriceEditorComponent {
    fn input_request(&self, key: KeyEvent) -> Option<InputRequest> {
        use KeyCode::*;
        use tui_input::InputRequest::*;

        match (key.code, key.modifiers) {
            (Backspace, KeyModifiers::NONE) => Some(DeletePrevChar),
            (Delete, KeyModifiers::NONE) => Some(DeleteNextChar),
            (Left, KeyModifiers::NONE) => Some(GoToPrevChar),
            (Right, KeyModifiers::NONE) => Some(GoToNextChar),
            (Char('u'), KeyModifiers::CONTROL) => Some(DeleteLine),
            (Home, KeyModifiers::NONE) => Some(GoToStart),
            (End, KeyModifiers::NONE) => Some(GoToEnd),
            (Char(c), KeyModifiers::NONE) => Some(InsertChar(c)),
            (Char(c), KeyModifiers::SHIFT) => Some(InsertChar(c)),
            (_, _) => None,
        }
    }

    /// Parses the input and sends either the new price or the parse error
    fn commit(&mut self) -> Result<()> {
        let Some(index) = self.index.take() else {
            return Ok(());
        };
        let action = match self.input.value().parse::<Price>() {
            Ok(price) => {
                debug!("price edited at row {index}: {price}");
                Action::PriceEdited { index, price }
            }
            Err(e) => {
                warn!("rejected price `{}`: {e}", self.input.value());
                Action::Error(UserError::from(("Invalid price", e)))
            }
        };
        self.action_tx
            .as_ref()
            .ok_or_else(|| anyhow!("action handler not registered"))?
            .send(action)?;
        Ok(())
    }
}

impl Component for PriceEditorComponent {
    fn id(&self) -> ComponentId {
        ComponentId::PriceEditor
    }

    fn shortcuts(&self) -> Vec<Shortcut> {
        vec![
            Shortcut::new(vec![Fragment::hl("Enter"), Fragment::raw(" apply")]),
            Shortcut::new(vec![Fragment::hl("Esc"), Fragment::raw(" cancel")]),
        ]
    }

    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        self.action_tx = Some(tx);
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(Some(Action::Quit));
            }
            KeyCode::Esc => {
                self.index = None;
                return Ok(Some(Action::Unfocus));
            }
            KeyCode::Enter => {
                self.commit()?;
                return Ok(Some(Action::Unfocus));
            }
            _ => {
                if let Some(req) = self.input_request(key) {
                    let _ = self.input.handle(req);
                }
            }
        }
        Ok(None)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::EditPrice { index, price } => {
                self.index = Some(index);
                self.input = Input::new(price.to_fixed());
                return Ok(Some(Action::Focus(ComponentId::PriceEditor)));
            }
            _ => (),
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let area = popup_fixed(area, 30, 3);
        let style = Style::default().fg(Color::LightBlue);

        let width = area.width.max(3) - 3;
        let scroll = self.input.visual_scroll(width as usize);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(style)
            .title(top_title_line("price", style));
        let input = Paragraph::new(self.input.value()).scroll((0, scroll as u16)).block(block);

        frame.render_widget(Clear, area);
        frame.render_widget(input, area);
        let x = self.input.visual_cursor().max(scroll) - scroll + 1;
        frame.set_cursor_position((area.x + x as u16, area.y + 1));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

    use super::*;
    use crate::models::ParsePriceError;

    fn press(editor: &mut PriceEditorComponent, code: KeyCode) -> Option<Action> {
        editor.handle_key_event(KeyEvent::from(code)).unwrap()
    }

    fn open() -> (PriceEditorComponent, UnboundedReceiver<Action>) {
        let (tx, rx) = unbounded_channel();
        let mut editor = PriceEditorComponent::default();
        editor.register_action_handler(tx).unwrap();

        let action = editor
            .update(Action::EditPrice { index: 2, price: Price::from_units(400) })
            .unwrap();
        assert_eq!(action, Some(Action::Focus(ComponentId::PriceEditor)));
        assert_eq!(editor.input.value(), "400.00");
        (editor, rx)
    }

    #[test]
    fn test_commit() {
        let (mut editor, mut rx) = open();

        // cursor starts at the end of "400.00"
        for _ in 0..2 {
            press(&mut editor, KeyCode::Backspace);
        }
        assert_eq!(editor.input.value(), "400.");
        press(&mut editor, KeyCode::Char('5'));
        assert_eq!(editor.input.value(), "400.5");

        assert_eq!(press(&mut editor, KeyCode::Enter), Some(Action::Unfocus));
        assert_eq!(
            rx.try_recv().ok(),
            Some(Action::PriceEdited { index: 2, price: Price::from_cents(40050) })
        );
    }

    #[test]
    fn test_invalid_input_is_rejected() {
        let (mut editor, mut rx) = open();
        press(&mut editor, KeyCode::Char('x'));

        assert_eq!(press(&mut editor, KeyCode::Enter), Some(Action::Unfocus));
        assert_eq!(
            rx.try_recv().ok(),
            Some(Action::Error(UserError::from(("Invalid price", ParsePriceError::InvalidChar('x')))))
        );
    }

    #[test]
    fn test_cancel() {
        let (mut editor, mut rx) = open();
        press(&mut editor, KeyCode::Char('1'));
        assert_eq!(press(&mut editor, KeyCode::Esc), Some(Action::Unfocus));
        // nothing pending, Enter only closes
        assert_eq!(press(&mut editor, KeyCode::Enter), Some(Action::Unfocus));
        assert!(rx.try_recv().is_err());
    }
}
