//! Terminal rendering of the page for the `portfolio` binary.

mod terminal_surface;

pub use terminal_surface::TerminalSurface;
