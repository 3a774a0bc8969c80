//! Shared application plumbing for the bugswarm terminal shell.

use std::sync::{Arc, Mutex};

use bugswarm_core::SwarmState;

/// Swarm state shared between the tick loop and the renderer.
pub type SharedSwarm = Arc<Mutex<SwarmState>>;

pub mod terminal;

pub mod renderer {
    use anyhow::Result;

    use crate::SharedSwarm;

    /// Shared context passed to renderer implementations.
    pub struct RendererContext {
        pub swarm: SharedSwarm,
    }

    pub trait Renderer {
        /// Stable identifier describing the renderer implementation.
        fn name(&self) -> &'static str;

        /// Launch the renderer; blocks until the session completes.
        fn run(&self, ctx: RendererContext) -> Result<()>;
    }
}

pub use terminal::TerminalRenderer;
