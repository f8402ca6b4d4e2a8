use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use clap::Parser;
use jobby_core::{update, AppState, Msg};
use jobby_engine::ensure_data_dir;
use jobby_logging::{jobby_debug, jobby_info};

use super::config::{AppConfig, Args};
use super::effects::EffectRunner;
use super::logging;
use super::ui::input::{self, Command};
use super::ui::render;

/// Everything the main loop reacts to: typed lines and engine completions.
pub enum AppEvent {
    Input(String),
    InputClosed,
    Msg(Msg),
}

pub fn run_app() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = AppConfig::resolve(&args)?;
    ensure_data_dir(&config.data_dir)
        .with_context(|| format!("preparing data directory {:?}", config.data_dir))?;
    logging::initialize(config.log, config.level_filter()?, &config.data_dir);
    jobby_info!(
        "Starting jobby against {} (data dir {:?})",
        config.api_base_url,
        config.data_dir
    );

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let runner = EffectRunner::new(&config, event_tx.clone()).context("starting engine")?;
    spawn_input_reader(event_tx);

    let mut out = io::stdout();
    writeln!(out, "Type `help` for the list of commands.")?;

    let mut state = AppState::new();
    let credential = runner.restore_credential();
    dispatch(
        &mut state,
        &runner,
        Msg::Started {
            credential,
            path: args.start.clone(),
        },
        &mut out,
    )?;

    event_loop(&mut state, &runner, event_rx, &mut out)?;

    jobby_info!("Shutting down");
    Ok(())
}

/// Runs until `quit`, or until input has closed and the current screen has
/// no response left to wait for.
fn event_loop(
    state: &mut AppState,
    runner: &EffectRunner,
    events: impl IntoIterator<Item = AppEvent>,
    out: &mut impl Write,
) -> io::Result<()> {
    let mut input_open = true;
    for event in events {
        match event {
            AppEvent::Input(line) => match input::parse(&line, &state.view()) {
                Command::Dispatch(msg) => dispatch(state, runner, msg, out)?,
                Command::Help => write!(out, "{}", input::HELP)?,
                Command::Invalid(reason) => writeln!(out, "{reason}")?,
                Command::Ignore => {}
                Command::Quit => break,
            },
            AppEvent::Msg(msg) => dispatch(state, runner, msg, out)?,
            AppEvent::InputClosed => {
                jobby_debug!("input closed");
                input_open = false;
            }
        }
        out.flush()?;
        if !input_open && !state.has_requests_in_flight() {
            break;
        }
    }
    Ok(())
}

fn dispatch(
    state: &mut AppState,
    runner: &EffectRunner,
    msg: Msg,
    out: &mut impl Write,
) -> io::Result<()> {
    jobby_debug!("dispatch {:?}", msg);
    let (next, effects) = update(std::mem::take(state), msg);
    *state = next;
    runner.run(effects);
    if state.consume_dirty() {
        write!(out, "{}", render::render(&state.view()))?;
        out.flush()?;
    }
    Ok(())
}

fn spawn_input_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(AppEvent::Input(line)).is_err() {
                return;
            }
        }
        let _ = tx.send(AppEvent::InputClosed);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobby_core::{Credential, Password};
    use log::LevelFilter;
    use simplelog::{Config, WriteLogger};

    use crate::platform::test_support::{runner, RecordingApi, RecordingStore, SharedBuffer};

    fn signed_in_at(path: &str) -> AppState {
        let (state, _) = update(
            AppState::new(),
            Msg::Started {
                credential: Some(Credential::new("tok")),
                path: path.to_string(),
            },
        );
        state
    }

    #[test]
    fn debug_log_never_contains_the_password() {
        let log = SharedBuffer::default();
        WriteLogger::init(LevelFilter::Debug, Config::default(), log.clone())
            .expect("only this test installs a logger");
        let (runner, _events) = runner(RecordingApi::default(), RecordingStore::default());
        let mut state = AppState::new();
        let mut out = Vec::new();

        dispatch(
            &mut state,
            &runner,
            Msg::PasswordChanged(Password::new("hunter2-secret")),
            &mut out,
        )
        .unwrap();

        let logged = log.contents();
        assert!(logged.contains("PasswordChanged(Password(***))"));
        assert!(!logged.contains("hunter2-secret"));
    }

    #[test]
    fn closed_input_waits_for_pending_responses() {
        let (runner, _events) = runner(RecordingApi::default(), RecordingStore::default());
        let mut state = signed_in_at("/jobs");
        let mut out = Vec::new();
        let events = vec![
            AppEvent::InputClosed,
            AppEvent::Msg(Msg::ProfileLoaded {
                request: 1,
                result: Err(jobby_core::FetchFailure::new("offline")),
            }),
            AppEvent::Msg(Msg::JobsLoaded {
                request: 2,
                result: Ok(Vec::new()),
            }),
            // Never reached: the loop stops once both panels settle.
            AppEvent::Input("help".to_string()),
        ];

        event_loop(&mut state, &runner, events, &mut out).unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains(jobby_core::NO_JOBS_HEADING));
        assert!(!printed.contains("Commands:"));
        assert!(!state.has_requests_in_flight());
    }

    #[test]
    fn closed_input_on_an_idle_screen_stops_at_once() {
        let (runner, _events) = runner(RecordingApi::default(), RecordingStore::default());
        let mut state = signed_in_at("/");
        let mut out = Vec::new();

        event_loop(
            &mut state,
            &runner,
            vec![AppEvent::InputClosed, AppEvent::Input("help".to_string())],
            &mut out,
        )
        .unwrap();

        assert!(out.is_empty());
    }
}
