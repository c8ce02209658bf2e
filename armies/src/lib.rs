pub use attacks::*;
pub use coordinate::*;
pub use errors::*;
pub use pieces::*;
pub use placement::*;
pub use render::*;
pub use report::*;
pub use theme::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod attacks;
mod coordinate;
mod errors;
mod pieces;
mod placement;
mod render;
mod report;
mod theme;
mod visualization;
