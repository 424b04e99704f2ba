//! Chart layer for the page-view report.
//!
//! Builds renderer-neutral figure descriptions from prepared data and passes
//! them through the [`ChartRenderer`] seam. Pixel rendering is left to the
//! renderer implementation.

pub mod draw;
pub mod figure;
pub mod renderer;

pub use draw::{draw_bar_plot, draw_box_plot, draw_line_plot};
pub use figure::Figure;
pub use renderer::{ChartRenderer, FigureFileRenderer};
