// ABOUTME: Application state and the main event loop.
// ABOUTME: Applies one event at a time to the layout, then redraws the screen.

use std::time::Duration;

use anyhow::{bail, Result};
use moto_core::{Action, Config, KeyBindings, LayoutMode};
use moto_layout::{Axis, FixedLayout, Layout, LayoutEvent, LayoutTree, Node, SplitNode};
use moto_render::{fit, join_vertical, Theme};
use moto_terminal::{read_input, InputEvent, TerminalSession};
use tokio::sync::mpsc::{self, UnboundedSender};

use crate::fetch::fetch_results;
use crate::panes::{AppPane, PaneUpdate};

/// How long the input reader waits before checking whether the UI is gone
const INPUT_POLL: Duration = Duration::from_millis(100);

const TREE_HELP: &[Action] = &[
    Action::Quit,
    Action::SwitchPane,
    Action::ShrinkHorizontalSplit,
    Action::GrowHorizontalSplit,
    Action::ShrinkVerticalSplit,
    Action::GrowVerticalSplit,
    Action::ExplorerFullScreen,
    Action::TogglePreview,
];

const FIXED_HELP: &[Action] = &[
    Action::Quit,
    Action::SwitchPane,
    Action::ClosePane,
    Action::ShrinkHorizontalSplit,
    Action::GrowHorizontalSplit,
    Action::ShrinkVerticalSplit,
    Action::GrowVerticalSplit,
];

#[derive(Debug)]
pub enum AppEvent {
    Input(InputEvent),
    Results(PaneUpdate),
    InputFailed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

fn layout_event(action: Action) -> Option<LayoutEvent> {
    let event = match action {
        Action::Quit => return None,
        Action::SwitchPane => LayoutEvent::SwitchFocus,
        Action::ClosePane => LayoutEvent::ClosePane,
        Action::ShrinkHorizontalSplit => LayoutEvent::ShrinkPrimary(Axis::Horizontal),
        Action::GrowHorizontalSplit => LayoutEvent::GrowPrimary(Axis::Horizontal),
        Action::ShrinkVerticalSplit => LayoutEvent::ShrinkPrimary(Axis::Vertical),
        Action::GrowVerticalSplit => LayoutEvent::GrowPrimary(Axis::Vertical),
        Action::ExplorerFullScreen => LayoutEvent::ToggleSecondary(Axis::Horizontal),
        Action::TogglePreview => LayoutEvent::ToggleSecondary(Axis::Vertical),
    };
    Some(event)
}

pub struct App {
    layout: Box<dyn Layout<AppPane>>,
    keys: KeyBindings,
    theme: Theme,
    help: String,
    width: u16,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let settings = &config.layout;
        let explorer = AppPane::placeholder("explorer");
        let results = AppPane::results(config.results.headers.clone());
        let preview = AppPane::placeholder("preview");

        let (layout, help) = match settings.mode {
            LayoutMode::Tree => {
                let content = SplitNode::vertical(
                    Node::leaf(results),
                    Node::leaf(preview),
                    settings.results_min_height,
                    settings.preview_min_height,
                );
                let root = SplitNode::horizontal(
                    Node::leaf(explorer),
                    content.into(),
                    settings.explorer_min_width,
                    settings.content_min_width,
                );
                let layout: Box<dyn Layout<AppPane>> = Box::new(LayoutTree::new(root));
                (layout, TREE_HELP)
            }
            LayoutMode::Fixed => {
                let layout: Box<dyn Layout<AppPane>> = Box::new(FixedLayout::new(
                    explorer,
                    results,
                    preview,
                    settings.min_width,
                    settings.min_height,
                ));
                (layout, FIXED_HELP)
            }
        };

        Self {
            layout,
            keys: config.keys.clone(),
            theme: Theme::new(config.theme.active_border, config.theme.inactive_border),
            help: config.keys.help_line(help),
            width: 0,
        }
    }

    /// Fit the layout to the terminal, keeping the last row for help
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.layout.handle(LayoutEvent::Resize {
            width,
            height: height.saturating_sub(1),
        });
    }

    pub fn focused_pane(&self) -> &str {
        self.layout.focused_pane().name()
    }

    pub fn handle(&mut self, event: AppEvent) -> Result<Control> {
        match event {
            AppEvent::Input(InputEvent::Key(key)) => match self.keys.action_for(&key) {
                Some(action) => match layout_event(action) {
                    Some(event) => {
                        self.layout.handle(event);
                        tracing::debug!(
                            "{} -> {:?}, focus on {}",
                            key,
                            action,
                            self.focused_pane()
                        );
                    }
                    None => return Ok(Control::Quit),
                },
                None => tracing::debug!("Unbound key {}", key),
            },
            AppEvent::Input(InputEvent::Resize(width, height)) => self.resize(width, height),
            AppEvent::Results(update) => self.layout.for_each_pane_mut(&mut |pane| pane.update(&update)),
            AppEvent::InputFailed(message) => bail!("Terminal input failed: {}", message),
        }
        Ok(Control::Continue)
    }

    /// The whole screen: panes above, help line below
    pub fn frame(&self) -> String {
        let panes = self.layout.render(&self.theme);
        let help = fit(&self.help, self.width.into(), 1);
        join_vertical(&[&panes, &help])
    }
}

fn spawn_input_reader(tx: UnboundedSender<AppEvent>) {
    tokio::task::spawn_blocking(move || {
        while !tx.is_closed() {
            match read_input(INPUT_POLL) {
                Ok(Some(input)) => {
                    let _ = tx.send(AppEvent::Input(input));
                }
                Ok(None) => {}
                Err(e) => {
                    let _ = tx.send(AppEvent::InputFailed(e.to_string()));
                    break;
                }
            }
        }
    });
}

/// Run the UI until the user quits
pub async fn run(config: Config) -> Result<()> {
    let mut app = App::new(&config);
    let mut session = TerminalSession::enter()?;
    let (width, height) = session.size()?;
    app.resize(width, height);

    let (tx, mut rx) = mpsc::unbounded_channel();
    spawn_input_reader(tx.clone());
    match config.results.source.clone() {
        Some(path) => {
            tokio::spawn(fetch_results(path, config.results.limit, tx.clone()));
        }
        None => {
            tracing::info!("No results source configured");
            app.handle(AppEvent::Results(PaneUpdate::Finished))?;
        }
    }
    drop(tx);

    loop {
        session.draw(&app.frame())?;
        let Some(event) = rx.recv().await else {
            break;
        };
        if app.handle(event)? == Control::Quit {
            tracing::info!("Quit requested, exiting");
            break;
        }
    }
    Ok(())
}
