//! Isometric dungeon runner (default binary).
//!
//! Fixed-rate loop: drain input, step the session, snapshot, render, sleep
//! out the rest of the tick. Rendering uses crossterm and the framebuffer
//! renderer from `iso_dungeon::term`.

use std::time::{Duration, Instant};

use anyhow::Result;

use iso_dungeon::core::{Flow, GameSession, GameSnapshot};
use iso_dungeon::input::InputHandler;
use iso_dungeon::term::{Atlas, FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};
use iso_dungeon::{logging, GameConfig};

/// Redraw interval for screens that do not change.
const STATIC_REDRAW_MS: u64 = 250;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    if let Err(e) = logging::init(config.log_path.as_deref()) {
        eprintln!("logging disabled: {e:#}");
    }
    log::info!("starting at {} fps", config.fps);

    // Load before entering the alternate screen so a warning is not lost.
    let atlas = Atlas::load_or_placeholders(&config.glyph_path);

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, &config, atlas));

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        log::error!("fatal: {e:#}");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &GameConfig, atlas: Atlas) -> Result<()> {
    let mut session = GameSession::new();
    let view = GameView::new(atlas);
    let mut input = InputHandler::new();
    let mut throttle = RenderThrottle::new(STATIC_REDRAW_MS);

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);
    let mut fb = FrameBuffer::new(w, h);
    let mut snap = GameSnapshot::default();

    let tick = config.tick_duration();
    let started = Instant::now();

    loop {
        let frame_start = Instant::now();

        input.drain_terminal()?;
        let frame = input.take();
        if let Some((w, h)) = frame.resized {
            log::debug!("terminal resized to {w}x{h}");
            viewport = Viewport::new(w, h);
            term.invalidate();
            throttle.reset();
        }
        if frame.dropped > 0 {
            log::warn!("dropped {} actions this frame", frame.dropped);
        }

        let (px_w, px_h) = viewport.pixels();
        session.set_viewport(px_w, px_h);

        if session.step(&frame.actions) == Flow::Quit {
            log::info!("quit after {} ticks", session.ticks());
            return Ok(());
        }

        session.snapshot_into(&mut snap);
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, snap.fingerprint(), !snap.animating()) {
            view.render_into(&snap, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        let spent = frame_start.elapsed();
        std::thread::sleep(tick.checked_sub(spent).unwrap_or(Duration::ZERO));
    }
}
