//! Frame scheduling
//!
//! The display drives frames; the scheduler only decides whether a frame
//! callback still belongs to the live loop. Exactly one loop token is active
//! at a time, so a restart can never leave two loops running.

use log::debug;

/// Identifies one frame loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoopToken(u64);

/// What the frame driver should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    /// Request another frame for the same token
    Continue,
    /// Do not reschedule
    Stopped,
}

#[derive(Debug, Default)]
pub struct FrameScheduler {
    active: Option<LoopToken>,
    issued: u64,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new loop, retiring any previous one
    pub fn start(&mut self) -> LoopToken {
        self.issued += 1;
        let token = LoopToken(self.issued);
        if let Some(old) = self.active.replace(token) {
            debug!("Frame loop {:?} replaced by {:?}", old, token);
        }
        token
    }

    /// Stop the active loop. Returns false if nothing was running.
    pub fn stop(&mut self) -> bool {
        self.active.take().is_some()
    }

    pub fn is_active(&self, token: LoopToken) -> bool {
        self.active == Some(token)
    }

    pub fn active(&self) -> Option<LoopToken> {
        self.active
    }
}
