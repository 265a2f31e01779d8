use std::io::{self, BufRead, Write};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use dashboard_core::{update, AppState, AppViewModel, Effect, Msg};
use dashboard_engine::ReqwestInsightsApi;
use dashboard_logging::{dashboard_error, dashboard_info, dashboard_warn};

use super::config::DashboardConfig;
use super::effects::EffectRunner;
use super::logging;
use super::ui::input::{parse_command, Command};
use super::ui::{layout, render};

const TICK_INTERVAL: Duration = Duration::from_millis(75);

/// Everything the controller loop reacts to.
#[derive(Debug)]
pub enum AppEvent {
    Core(Msg),
    Help,
    Rejected(String),
    Quit,
}

pub fn run_app() -> anyhow::Result<()> {
    let config = DashboardConfig::load().context("reading configuration")?;
    logging::initialize(config.log_destination, config.log_level);
    dashboard_info!("Starting dashboard against {}", config.api_base_url);

    let api = ReqwestInsightsApi::new(config.api_settings()).context("building backend client")?;
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let effects =
        EffectRunner::new(Arc::new(api), event_tx.clone()).context("starting request worker")?;

    spawn_input_reader(event_tx.clone());

    // Background tick to coalesce rendering.
    thread::spawn(move || {
        while event_tx.send(AppEvent::Core(Msg::Tick)).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });

    let mut dashboard = Dashboard::default();
    let mut out = io::stdout();
    print_lines(&mut out, &layout::header_lines())?;
    print_lines(&mut out, &render::render(&dashboard.view()))?;
    print_lines(&mut out, &layout::help_lines())?;

    while let Ok(event) = event_rx.recv() {
        match event {
            AppEvent::Core(msg) => {
                let is_tick = matches!(msg, Msg::Tick);
                effects.enqueue(dashboard.dispatch_msg(msg));
                if is_tick {
                    if let Some(view) = dashboard.take_dirty_view() {
                        let mut lines = vec!["-".repeat(60)];
                        lines.extend(render::render(&view));
                        print_lines(&mut out, &lines)?;
                    }
                }
            }
            AppEvent::Help => print_lines(&mut out, &layout::help_lines())?,
            AppEvent::Rejected(reason) => print_lines(&mut out, &[reason])?,
            AppEvent::Quit => break,
        }
    }

    dashboard_info!("Dashboard exiting");
    Ok(())
}

/// Owns the view state; the only place `update` is called from.
#[derive(Default)]
struct Dashboard {
    state: AppState,
}

impl Dashboard {
    fn dispatch_msg(&mut self, msg: Msg) -> Vec<Effect> {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        effects
    }

    fn view(&self) -> AppViewModel {
        self.state.view()
    }

    /// Returns a view only if something changed since the last render.
    fn take_dirty_view(&mut self) -> Option<AppViewModel> {
        let view = self.state.view();
        if self.state.consume_dirty() {
            Some(view)
        } else {
            None
        }
    }
}

fn spawn_input_reader(events: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    dashboard_warn!("Failed to read input: {}", err);
                    break;
                }
            };
            let event = match parse_command(&line) {
                Ok(Command::Core(msg)) => AppEvent::Core(msg),
                Ok(Command::Help) => AppEvent::Help,
                Ok(Command::Quit) => break,
                Err(reason) => AppEvent::Rejected(reason),
            };
            if events.send(event).is_err() {
                return;
            }
        }
        let _ = events.send(AppEvent::Quit);
    });
}

fn print_lines(out: &mut impl Write, lines: &[String]) -> io::Result<()> {
    write_lines(out, lines).inspect_err(|err| {
        dashboard_error!("Writing to the terminal failed: {}", err);
    })
}

fn write_lines(out: &mut impl Write, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
