//! # Core Application Logic
//!
//! The note's behaviour, independent of any GUI toolkit.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • App (note context)   │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • storage (save file)  │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    GUI     │
//!                         │  Adapter   │
//!                         │  (eframe)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct: all note state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`buffer`]: The note text and its selection
//! - [`drag`]: Drag anchor and window-origin math
//! - [`storage`]: Loading and saving the note file
//! - [`config`]: Layered settings

pub mod action;
pub mod buffer;
pub mod config;
pub mod drag;
pub mod geometry;
pub mod state;
pub mod storage;
