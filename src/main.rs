//! Terminal keyword quiz runner (default binary).
//!
//! It uses crossterm for key and mouse input and a custom framebuffer-based
//! renderer. The loop sleeps until the next input event, the next timer
//! display tick, or the idle poll interval, whichever comes first.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use keyword_match::core::{QuizSession, QuizStore, SimpleRng};
use keyword_match::input::{handle_key_event, handle_mouse_event, should_quit};
use keyword_match::store::open_store;
use keyword_match::term::{FrameBuffer, Layout, QuizView, TerminalRenderer, Viewport};
use keyword_match::types::IDLE_POLL_MS;
use keyword_match::{init_logging, AppConfig};

type Session = QuizSession<Box<dyn QuizStore>>;

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    init_logging(&config)?;

    let seed = config
        .seed
        .unwrap_or_else(|| SimpleRng::from_millis(now_ms()).seed());
    tracing::info!(seed, "starting keyword match");

    let mut session = QuizSession::with_shipped_content(open_store(&config.store), seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        tracing::error!("terminal loop failed: {e:#}");
    }
    result
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = QuizView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut layout = Layout::new();
    let mut dirty = true;

    loop {
        // Render.
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            layout = view.render_into(&session.snapshot(), Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        // Input with timeout until the next display tick.
        let now = now_ms();
        let timeout_ms = session
            .next_wakeup()
            .map_or(IDLE_POLL_MS, |due| due.saturating_sub(now))
            .min(IDLE_POLL_MS);

        if event::poll(Duration::from_millis(timeout_ms))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        tracing::info!("quit requested");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        dirty |= session.apply_action(action, now_ms());
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(action) = handle_mouse_event(mouse, |x, y| layout.hit(x, y)) {
                        dirty |= session.apply_action(action, now_ms());
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        // Tick.
        dirty |= session.tick(now_ms());
    }
}
