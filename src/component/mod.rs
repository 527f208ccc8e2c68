mod finder;
mod order;

pub use finder::{Cell, CellBounds, Component, ComponentMap, find_components};
pub use order::{filter_components, sort_components};
