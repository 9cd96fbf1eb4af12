use std::collections::HashMap;

use anyhow::{Result, anyhow};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use crate::action::Action;
use crate::components::footer_component::FooterComponent;
use crate::components::grid_component::GridComponent;
use crate::components::help_component::HelpComponent;
use crate::components::price_editor_component::PriceEditorComponent;
use crate::components::title_component::TitleComponent;
use crate::components::{Component, ComponentId};
use crate::config::Config;

#[derive(Default)]
pub struct RootComponent {
    components: HashMap<ComponentId, Box<dyn Component>>,
    action_tx: Option<UnboundedSender<Action>>,
    popup: Option<ComponentId>,
}

impl RootComponent {
    pub fn new(config: &Config, config_path: String) -> Self {
        let components: Vec<Box<dyn Component>> = vec![
            Box::new(TitleComponent::default()),
            Box::new(GridComponent::new(config.row_height)),
            Box::new(FooterComponent::default()),
            Box::new(HelpComponent::new(config_path)),
            Box::new(PriceEditorComponent::default()),
        ];
        let components = components.into_iter().map(|c| (c.id(), c)).collect::<HashMap<_, _>>();
        Self { components, ..Self::default() }
    }

    fn get(&mut self, id: ComponentId) -> Result<&mut Box<dyn Component>> {
        self.components.get_mut(&id).ok_or_else(|| anyhow!("component {id:?} not registered"))
    }

    fn send(&self, action: Action) -> Result<()> {
        self.action_tx
            .as_ref()
            .ok_or_else(|| anyhow!("action handler not registered"))?
            .send(action)?;
        Ok(())
    }

    /// Shortcuts shown in the footer follow whatever has the keyboard
    fn send_shortcuts(&mut self) -> Result<()> {
        let focused = self.popup.unwrap_or(ComponentId::Grid);
        let shortcuts = self.get(focused)?.shortcuts();
        self.send(Action::Shortcuts(shortcuts))
    }
}

impl Component for RootComponent {
    fn id(&self) -> ComponentId {
        ComponentId::Root
    }

    fn init(&mut self) -> Result<()> {
        for component in self.components.values_mut() {
            component.init()?;
        }
        self.send_shortcuts()
    }

    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        for component in self.components.values_mut() {
            component.register_action_handler(tx.clone())?;
        }
        self.action_tx = Some(tx);
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // popup owns the keyboard while open
        if let Some(popup) = self.popup {
            return self.get(popup)?.handle_key_event(key);
        }

        match key.code {
            KeyCode::Char('q') => return Ok(Some(Action::Quit)),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(Some(Action::Quit));
            }
            KeyCode::Char('z') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(Some(Action::Suspend));
            }
            KeyCode::Char('?') => return Ok(Some(Action::Focus(ComponentId::Help))),
            _ => {}
        }
        debug!("Try handling key event: key={:?}", key);
        self.get(ComponentId::Grid)?.handle_key_event(key)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if self.popup.is_some() {
            return Ok(None);
        }
        self.get(ComponentId::Grid)?.handle_mouse_event(mouse)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Focus(id) => {
                self.popup = Some(id);
                self.send_shortcuts()?;
            }
            Action::Unfocus => {
                self.popup = None;
                self.send_shortcuts()?;
            }
            _ => {}
        }
        // propagate action to all components
        for component in self.components.values_mut() {
            if let Some(next) = component.update(action.clone())? {
                self.action_tx
                    .as_ref()
                    .ok_or_else(|| anyhow!("action handler not registered"))?
                    .send(next)?;
            }
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let [title, body, footer] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
                .areas(area);

        self.get(ComponentId::Title)?.draw(frame, title)?;
        self.get(ComponentId::Grid)?.draw(frame, body)?;
        if let Some(popup) = self.popup {
            self.get(popup)?.draw(frame, body)?;
        }
        self.get(ComponentId::Footer)?.draw(frame, footer)?;
        Ok(())
    }
}
