mod grid;
mod pose;

pub use grid::{Cell, CellPos, DEFAULT_CELL_SIZE, GridError, GridMap};

pub use pose::Pose;
