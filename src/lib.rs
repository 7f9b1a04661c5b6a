pub mod error;
pub mod geometry;
pub mod math;

pub use error::{ArcsegError, Result};
pub use geometry::{Circle, Line, Point, Shape};
