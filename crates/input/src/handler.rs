//! Per-frame input collection.
//!
//! Every key press becomes exactly one action; auto-repeat and release
//! events are dropped, so holding a key never moves the player more than
//! once per press.

use std::time::Duration;

use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::handle_key_event;
use crate::types::GameAction;

/// Upper bound on actions accepted in a single frame.
pub const MAX_ACTIONS_PER_FRAME: usize = 32;

/// Everything that arrived since the previous frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub actions: ArrayVec<GameAction, MAX_ACTIONS_PER_FRAME>,
    /// Last terminal size reported, if the terminal was resized.
    pub resized: Option<(u16, u16)>,
    /// Actions discarded because the frame buffer was full.
    pub dropped: usize,
}

impl FrameInput {
    pub fn quit_requested(&self) -> bool {
        self.actions.contains(&GameAction::Quit)
    }
}

#[derive(Debug, Clone, Default)]
pub struct InputHandler {
    pending: FrameInput,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one terminal event.
    pub fn handle_event(&mut self, ev: Event) {
        match ev {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(action) = handle_key_event(key) {
                    if self.pending.actions.try_push(action).is_err() {
                        self.pending.dropped += 1;
                    }
                }
            }
            Event::Resize(w, h) => self.pending.resized = Some((w, h)),
            _ => {}
        }
    }

    /// Read every event already queued by the terminal without blocking.
    pub fn drain_terminal(&mut self) -> std::io::Result<()> {
        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            self.handle_event(ev);
        }
        Ok(())
    }

    /// Hand over this frame's input and start collecting the next.
    pub fn take(&mut self) -> FrameInput {
        std::mem::take(&mut self.pending)
    }
}
