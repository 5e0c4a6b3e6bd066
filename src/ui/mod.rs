/// Presentation layer: panels, the map plot, and tooltip formatting.
pub mod panels;
pub mod plot;
pub mod tooltip;
