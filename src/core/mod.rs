//! Session core for sangay.
//!
//! Provides the phase sequencer, the session clock it drives, the host tick
//! source, and the traits the core uses to reach its collaborators.

pub mod clock;
pub mod phase;
pub mod ticker;
mod traits;

pub use clock::{PhaseCompletion, SessionClock, SessionState, SessionSummary};
pub use phase::{
    duration_for, initial_phase, next_phase, sequence_len, Phase, SessionKind, TimerConfig,
};
pub use ticker::Ticker;
pub use traits::{save_best_effort, ResponderService, Store};

#[cfg(test)]
pub use traits::MockStore;
