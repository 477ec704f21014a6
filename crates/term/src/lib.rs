//! Terminal "game renderer" module.
//!
//! A small rendering layer for the play screen. It avoids widget toolkits and
//! renders into a plain framebuffer that is flushed to the terminal with
//! crossterm, rewriting only the cells that changed.
//!
//! - [`fb`]: styled character framebuffer
//! - [`table_view`]: pure mapping from a session snapshot to a framebuffer
//! - [`renderer`]: raw-mode terminal output with diffing

pub mod fb;
pub mod renderer;
pub mod table_view;

pub use spoticards_core as core;
pub use spoticards_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use table_view::{TableUi, TableView, Viewport};
