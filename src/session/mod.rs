//! Search Session Module
//!
//! The submit cycle behind a search box, shared by the terminal client and
//! the web UI.
//!
//! ## State Machine
//! ```text
//! Idle ──submit──▶ (validate) ──blank──▶ Idle + error
//!                       │
//!                       ▼
//!                    Pending ──2xx + JSON──▶ Success (results replaced)
//!                       │
//!                       └──any error──▶ Failed (results cleared)
//! ```
//!
//! Every submission that passes validation draws a ticket; only the latest
//! ticket may settle the state.
//!
//! ## Submodules
//! - **`session`**: `SearchSession`, owner of the state and the ticket counter.
//! - **`types`**: `SearchState` and its transitions, `SearchPhase`, `SubmitOutcome`.

pub mod session;
pub mod types;
