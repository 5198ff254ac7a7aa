//! Data structures shared between the graph store and the coloring engine.

mod matrix;

pub use matrix::Matrix;
