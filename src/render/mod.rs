pub mod boundary;

pub use boundary::{boundary_color, render_boundary, save_boundary_png, RenderConfig};
