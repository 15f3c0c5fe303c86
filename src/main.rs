// src/main.rs

//! Interactive maze preview driven by text commands on stdin.

use maze_preview::command::{parse_command, Command, HELP};
use maze_preview::config::{Config, CONFIG};
use maze_preview::surface::{GridOutlineEngine, HeadlessSurface};
use maze_preview::{PreviewSession, SessionStatus, Surface, SurfaceAdapter};

use anyhow::Context;
use log::{debug, error, info, warn};
use std::io::BufRead;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    // Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    info!("Starting maze-preview...");
    let config: &Config = &CONFIG;
    info!(
        "Debounce {} ms, auto-preview {}",
        config.preview.debounce_ms, config.preview.auto_preview
    );

    // stdin → main loop. Reading blocks, so it gets its own thread.
    let (line_tx, line_rx) = mpsc::sync_channel::<String>(128);
    thread::Builder::new()
        .name("stdin".to_string())
        .spawn(move || {
            for line in std::io::stdin().lock().lines() {
                match line {
                    Ok(line) => {
                        if line_tx.send(line).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        warn!("stdin read failed: {}", e);
                        break;
                    }
                }
            }
            debug!("stdin reader exiting");
        })
        .context("Failed to spawn stdin reader thread")?;

    let mut surface = HeadlessSurface::new();
    let mut engine = GridOutlineEngine::new();
    let mut session = PreviewSession::new(config, SurfaceAdapter::new(&mut surface, &mut engine));

    println!("{}", HELP);
    session.start(Instant::now());
    print_summary(&session);

    loop {
        fire_due_render(&mut session, Instant::now());

        let received = match session.time_until_render(Instant::now()) {
            Some(wait) => line_rx.recv_timeout(wait),
            None => line_rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };

        let line = match received {
            Ok(line) => line,
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => {
                // Input ended; let a pending preview finish before exiting.
                if let Some(wait) = session.time_until_render(Instant::now()) {
                    thread::sleep(wait);
                    fire_due_render(&mut session, Instant::now());
                }
                info!("Input closed. Exiting.");
                break;
            }
        };

        match parse_command(&line, &config.presets) {
            Ok(Command::Help) => println!("{}", HELP),
            Ok(Command::Show) => print_state(&session)?,
            Ok(Command::Event(event)) => match session.handle_event(event, Instant::now()) {
                Ok(SessionStatus::Running) => print_summary(&session),
                Ok(SessionStatus::Shutdown) => {
                    info!("Shutdown requested.");
                    break;
                }
                Err(e) => {
                    error!("{:#}", e);
                    println!("render failed: {:#}", e);
                }
            },
            Err(e) => println!("error: {}", e),
        }
    }

    Ok(())
}

fn fire_due_render(session: &mut PreviewSession<'_>, now: Instant) {
    match session.process_timers(now) {
        Ok(Some(request)) => {
            let (width_px, height_px) = session.adapter.surface.dimensions();
            println!(
                "rendered {} maze: {} x {} px surface",
                request.mode, width_px, height_px
            );
        }
        Ok(None) => {}
        // Not retried; the next edit or submit tries again.
        Err(e) => {
            error!("{:#}", e);
            println!("render failed: {:#}", e);
        }
    }
}

fn print_summary(session: &PreviewSession<'_>) {
    let config = session.config();
    println!(
        "cell {} | cols {} | rows {} | mode {} | {}",
        config.cell_size,
        config.cols,
        config.rows,
        session.mode(),
        session.caption()
    );
    for (field, message) in session.validation().errors() {
        println!("  {}: {}", field, message);
    }
}

fn print_state(session: &PreviewSession<'_>) -> anyhow::Result<()> {
    let state = serde_json::json!({
        "config": session.config(),
        "mode": session.mode(),
        "autoPreview": session.auto_preview(),
        "validation": session.validation(),
        "caption": session.caption(),
        "pendingRender": session.next_deadline().is_some(),
        "renders": session.render_count(),
    });
    let text = serde_json::to_string_pretty(&state).context("Failed to format state")?;
    println!("{}", text);
    Ok(())
}
