pub mod axis;
pub mod chart;
pub mod layout;
pub mod legend;
pub mod page;
pub mod svg;

pub use chart::{render_chart, render_into, Cell, CellDatum, Drawing};
pub use layout::Layout;
pub use page::{Container, Page, StatusLine};
