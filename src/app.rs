use anyhow::Result;
use ratatui::prelude::Rect;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{info, trace};

use crate::action::Action;
use crate::components::root_component::RootComponent;
use crate::components::{APP_TITLE, Component};
use crate::config::Config;
use crate::error::UserError;
use crate::tui::{Event, Tui};

pub struct App {
    root: RootComponent,
    tick_rate: f64,
    frame_rate: f64,

    should_quit: bool,
    should_suspend: bool,
    action_tx: UnboundedSender<Action>,
    action_rx: UnboundedReceiver<Action>,
}

impl App {
    pub fn new(config: &Config, config_path: String, tick_rate: f64, frame_rate: f64) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            root: RootComponent::new(config, config_path),
            tick_rate,
            frame_rate,

            should_quit: false,
            should_suspend: false,
            action_tx,
            action_rx,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?.tick_rate(self.tick_rate).frame_rate(self.frame_rate).mouse(true);
        tui.enter()?;
        tui.set_title(APP_TITLE)?;

        self.root.register_action_handler(self.action_tx.clone())?;
        self.root.init()?;
        info!("grid ready");

        let action_tx = self.action_tx.clone();
        loop {
            self.handle_events(&mut tui).await?;
            self.handle_actions(&mut tui)?;
            if self.should_suspend {
                tui.suspend()?;
                action_tx.send(Action::Resume)?;
                action_tx.send(Action::ClearScreen)?;
                tui.resume()?;
            } else if self.should_quit {
                tui.stop()?;
                break;
            }
        }
        tui.exit()?;
        Ok(())
    }

    async fn handle_events(&mut self, tui: &mut Tui) -> Result<()> {
        let Some(event) = tui.next_event().await else {
            return Ok(());
        };
        let action_tx = self.action_tx.clone();
        match event {
            Event::Tick => action_tx.send(Action::Tick)?,
            Event::Render => action_tx.send(Action::Render)?,
            Event::Resize(x, y) => action_tx.send(Action::Resize(x, y))?,
            _ => trace!("handle_events: {event:?}"),
        }
        if let Some(action) = self.root.handle_events(Some(event))? {
            action_tx.send(action)?;
        }
        Ok(())
    }

    fn handle_actions(&mut self, tui: &mut Tui) -> Result<()> {
        while let Ok(action) = self.action_rx.try_recv() {
            if action != Action::Tick && action != Action::Render {
                trace!("handle_actions: {action:?}");
            }
            match action {
                Action::Quit => self.should_quit = true,
                Action::Suspend => self.should_suspend = true,
                Action::Resume => self.should_suspend = false,
                Action::ClearScreen => tui.terminal.clear()?,
                Action::Resize(w, h) => self.handle_resize(tui, w, h)?,
                Action::Render => self.render(tui)?,
                Action::SelectionChanged(ref summary) => {
                    tui.set_title(summary.as_deref().unwrap_or(APP_TITLE))?
                }
                _ => {}
            }
            if let Some(action) = self.root.update(action)? {
                self.action_tx.send(action)?
            };
        }
        Ok(())
    }

    fn handle_resize(&mut self, tui: &mut Tui, w: u16, h: u16) -> Result<()> {
        tui.resize(Rect::new(0, 0, w, h))?;
        self.render(tui)?;
        Ok(())
    }

    fn render(&mut self, tui: &mut Tui) -> Result<()> {
        tui.draw(|frame| {
            let area = frame.area();
            if let Err(err) = self.root.draw(frame, area) {
                let _ = self.action_tx.send(Action::Error(UserError::from(("Failed to draw", err))));
            }
        })?;
        Ok(())
    }
}
