//! Runtime: unified event loop and input routing for the TUI.
//!
//! Responsibilities
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode).
//! - Drive a single event loop that handles input, ticks, and effects.
//! - Route input to the main view and execute returned `Effect`s.
//! - Render only when something changed.
//!
//! Event Loop Strategy
//! - A dedicated input thread blocks on `crossterm::event::read()` and
//!   forwards events over a channel, avoiding cross-thread poll/read issues
//!   and ensuring reliable resize delivery across terminals.
//! - Smart ticking: fast interval (100 ms) only while a status line is on
//!   screen; long interval (5 s) when idle.
//!
//! Entry Point
//! - `run_app(records, preferred_theme)` is called from `lib::run` and
//!   performs setup, event processing, and teardown.
use anyhow::Result;
use crossterm::event::MouseEventKind;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, prelude::*};
use std::rc::Rc;
use std::time::{Duration, Instant};
use tokio::{
    signal,
    sync::mpsc,
    time::{self, MissedTickBehavior},
};
use walletdeck_types::{Effect, Msg, WalletRecord};

use crate::app::App;
use crate::cmd;
use crate::ui::components::component::Component;
use crate::ui::components::{DashboardComponent, EmptyStateComponent};
use crate::ui::main_component::MainView;
use rat_focus::FocusBuilder;

/// Spawn a dedicated input thread that blocks on terminal input and forwards
/// `crossterm` events over a Tokio channel.
///
/// Keeping `poll()` and `read()` on the same OS thread avoids lost or delayed
/// events in some terminals.
async fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);
    let mut last_mouse_event: Option<Instant> = Some(Instant::now());

    tokio::spawn(async move {
        let sixteen_ms = Duration::from_millis(16);
        loop {
            if event::poll(sixteen_ms).is_ok() {
                match event::read() {
                    Ok(event) => {
                        // Throttle mouse move events to once per 16 ms.
                        let is_mouse_move = event.as_mouse_event().is_some_and(|e| e.kind == MouseEventKind::Moved);
                        let should_send = !is_mouse_move || last_mouse_event.is_some_and(|last| last.elapsed() >= sixteen_ms);
                        if is_mouse_move && should_send {
                            last_mouse_event = Some(Instant::now());
                        }

                        if should_send && let Err(e) = sender.send(event).await {
                            tracing::warn!("Failed to send event: {}", e);
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Failed to read event: {}", e);
                        break;
                    }
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
///
/// Returns a ratatui `Terminal` backed by Crossterm for later drawing.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Renders a frame by delegating to `MainView::render`.
fn render(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    // Rebuild focus just before rendering so structure changes are reflected
    let old_focus = std::mem::take(&mut app.focus);
    app.focus = Rc::new(FocusBuilder::rebuild_for(app, Some(Rc::unwrap_or_clone(old_focus))));
    if app.focus.focused().is_none() {
        main_view.restore_focus(app);
    }
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

/// Handle raw crossterm input events and update `App`/components.
fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) => main_view.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Resize(width, height) => main_view.handle_message(app, Msg::Resize(width, height)),

        Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    }
}

/// Entry point for the TUI runtime: sets up the terminal, spawns the event
/// producer, runs the async event loop, and performs cleanup on exit.
pub async fn run_app(records: Vec<WalletRecord>, preferred_theme: Option<&str>) -> Result<()> {
    // Input comes from a dedicated blocking thread to ensure reliability.
    let mut input_receiver = spawn_input_thread().await;
    let content: Box<dyn Component> = if records.is_empty() {
        Box::new(EmptyStateComponent::default())
    } else {
        Box::new(DashboardComponent::default())
    };
    let mut main_view = MainView::new(Some(content));

    let mut app = App::new(records, preferred_theme);
    let mut terminal = setup_terminal()?;

    let mut effects: Vec<Effect> = Vec::with_capacity(5);

    // Ticking strategy: fast while a status line is live, very slow when idle.
    let fast_interval = Duration::from_millis(100);
    let idle_interval = Duration::from_millis(5000);
    let mut current_interval = idle_interval;
    let mut ticker = time::interval(current_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    render(&mut terminal, &mut app, &mut main_view)?;

    // Track the last known terminal size to synthesize Resize messages when
    // some terminals fail to emit them reliably.
    let mut last_size: Option<(u16, u16)> = crossterm::terminal::size().ok();

    loop {
        // Determine if we need animation ticks and adjust the ticker dynamically.
        let needs_animation = !effects.is_empty() || app.status.has_active_entry();
        let target_interval = if needs_animation { fast_interval } else { idle_interval };
        if target_interval != current_interval {
            current_interval = target_interval;
            ticker = time::interval(current_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        }
        let mut needs_render = false;
        tokio::select! {
            // Terminal input events
            maybe_event = input_receiver.recv() => {
                if let Some(event) = maybe_event {
                    if let Event::Key(key_event) = event
                        && key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL) {
                            break;
                        }
                    effects.extend(handle_input_event(&mut app, &mut main_view, event));
                } else {
                    // Input channel closed; break out to shut down cleanly.
                    break;
                }
                needs_render = true;
            }

            // Periodic tick: expires status entries and keeps the footer fresh.
            _ = ticker.tick() => {
                effects.extend(main_view.handle_message(&mut app, Msg::Tick));
                needs_render = needs_animation || !effects.is_empty();
            }

            // Handle Ctrl+C
            _ = signal::ctrl_c() => { break; }
        }

        if !effects.is_empty() {
            // Move effects out of their Vec to avoid processing new effects
            // while processing current ones.
            let mut effects_to_process = Vec::with_capacity(effects.len());
            effects_to_process.append(&mut effects);

            if effects_to_process.contains(&Effect::Quit) {
                break;
            }
            handle_navigation_effects(&mut app, &mut main_view, &mut effects_to_process);
            cmd::run_cmds(&mut app, cmd::from_effects(&effects_to_process));
            needs_render = true;
        }

        // Fallback: detect terminal size changes even if no explicit Resize
        // event was received. This handles terminals that miss SIGWINCH or
        // drop resize notifications during interactive operations.
        if let Ok((w, h)) = crossterm::terminal::size()
            && last_size != Some((w, h))
        {
            last_size = Some((w, h));
            let _ = app.update(&Msg::Resize(w, h));
            needs_render = true;
        }

        // Render if dirty
        if needs_render {
            render(&mut terminal, &mut app, &mut main_view)?;
        }
    }

    cleanup_terminal(&mut terminal)?;
    Ok(())
}

/// Pulls modal open/close effects out of the batch and applies them to the
/// main view. The remaining effects flow on to the command layer.
fn handle_navigation_effects(app: &mut App, main_view: &mut MainView, effects: &mut Vec<Effect>) {
    let navigation_effects = effects
        .extract_if(0.., |effect| matches!(effect, Effect::ShowModal(_) | Effect::CloseModal))
        .collect::<Vec<Effect>>();

    for effect in navigation_effects {
        match effect {
            Effect::ShowModal(modal) => {
                main_view.set_open_modal_kind(app, Some(modal));
            }
            Effect::CloseModal => {
                main_view.set_open_modal_kind(app, None);
            }
            _ => {}
        }
    }
}
