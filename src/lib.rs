//! hostlens: terminal viewer for a host security-monitoring backend.
//!
//! The backend serves alerts, parsed log events, network and process events,
//! and metric snapshots as JSON envelopes. hostlens renders saved responses
//! as aligned text tables and detail blocks, normalizing every timestamp on
//! the way through.
//!
//! # Architecture
//!
//! ```text
//! hostlens-core ──► hostlens-views ──► commands (this crate) ──► stdout
//!  timestamp         pages, table,       fmt / render /
//!  envelope, types   detail, state       detail / endpoint
//!  config
//! ```
//!
//! The command functions take their input and output explicitly so the
//! integration harnesses can drive them without spawning the binary.

pub mod commands;

pub use hostlens_core as core;
pub use hostlens_views as views;
