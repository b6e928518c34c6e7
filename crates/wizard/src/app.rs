use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Layout, Rect};
use stepform::Submission;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, error, info};

use crate::{
    action::Action,
    components::{Component, overview::Overview, status_bar::StatusBar, step_panel::StepPanel},
    config::Config,
    state::State,
    style::Theme,
    tui::{Event, EventResponse, Frame, Tui},
};

pub struct App {
    tick_rate: f64,
    frame_rate: f64,
    components: Vec<Box<dyn Component>>,
    state: State,
    should_quit: bool,
    action_tx: UnboundedSender<Action>,
    action_rx: UnboundedReceiver<Action>,
}

impl App {
    pub fn new(config: Config, tick_rate: f64, frame_rate: f64) -> Result<Self> {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let theme = Theme::default();
        let state = State::new(config.form.document()?);
        Ok(Self {
            tick_rate,
            frame_rate,
            components: vec![
                Box::new(Overview::new(config.form.title.clone(), theme.clone())),
                Box::new(StepPanel::new(theme.clone())),
                Box::new(StatusBar::new(theme)),
            ],
            state,
            should_quit: false,
            action_tx,
            action_rx,
        })
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Run until the user quits or the form is submitted. Returns the
    /// accepted submission, if any.
    pub async fn run(&mut self) -> Result<Option<Submission>> {
        let mut tui = Tui::new()?
            .tick_rate(self.tick_rate)
            .frame_rate(self.frame_rate)
            .paste(true);
        tui.enter()?;

        for component in self.components.iter_mut() {
            component.init(&self.state)?;
        }

        loop {
            if let Some(event) = tui.next().await {
                self.handle_event(event)?;
            }
            self.handle_actions(&mut tui)?;
            if self.should_quit {
                tui.stop()?;
                break;
            }
        }
        tui.exit()?;
        Ok(self.state.submission.take())
    }

    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        let action_tx = self.action_tx.clone();
        match event {
            Event::Tick => action_tx.send(Action::Tick)?,
            Event::Render => action_tx.send(Action::Render)?,
            Event::Resize(x, y) => action_tx.send(Action::Resize(x, y))?,
            Event::Error => action_tx.send(Action::Error("terminal input failed".into()))?,
            Event::Key(key) if is_quit(key) => {
                action_tx.send(Action::Quit)?;
                return Ok(());
            }
            _ => {}
        }
        for component in self.components.iter_mut() {
            match component.handle_events(event.clone(), &mut self.state)? {
                Some(EventResponse::Continue(action)) => action_tx.send(action)?,
                Some(EventResponse::Stop(action)) => {
                    action_tx.send(action)?;
                    break;
                }
                None => {}
            }
        }
        Ok(())
    }

    fn handle_actions(&mut self, tui: &mut Tui) -> Result<()> {
        while let Ok(action) = self.action_rx.try_recv() {
            match action {
                Action::Resize(w, h) => {
                    tui.resize(Rect::new(0, 0, w, h))?;
                    self.render(tui)?;
                }
                Action::Render | Action::Update | Action::StepChanged(_) => self.render(tui)?,
                _ => {}
            }
            self.dispatch(action)?;
        }
        Ok(())
    }

    /// Apply `action` to the app and hand it to every component.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        if !matches!(action, Action::Tick | Action::Render) {
            debug!("{action:?}");
        }
        match &action {
            Action::Quit => self.should_quit = true,
            Action::Submitted => {
                info!("submission accepted, closing");
                self.should_quit = true;
            }
            Action::Error(msg) => error!("{msg}"),
            _ => {}
        }
        for component in self.components.iter_mut() {
            if let Some(action) = component.update(action.clone(), &mut self.state)? {
                self.action_tx.send(action)?;
            }
        }
        Ok(())
    }

    /// Drain queued actions without a terminal attached.
    pub fn drain(&mut self) -> Result<()> {
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action)?;
        }
        Ok(())
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn render(&mut self, tui: &mut Tui) -> Result<()> {
        let mut result = Ok(());
        tui.draw(|f| result = self.draw(f))?;
        if let Err(e) = result {
            self.action_tx.send(Action::Error(format!("Failed to draw: {e:?}")))?;
        }
        Ok(())
    }

    pub fn draw(&mut self, f: &mut Frame<'_>) -> Result<()> {
        let constraints: Vec<_> = self.components.iter().map(|c| c.height_constraint()).collect();
        let areas = Layout::vertical(constraints).split(f.area());
        for (component, area) in self.components.iter_mut().zip(areas.iter()) {
            component.draw(f, *area, &self.state)?;
        }
        Ok(())
    }
}

fn is_quit(key: KeyEvent) -> bool {
    matches!(
        (key.code, key.modifiers),
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL)
    )
}
