pub mod algorithms;
pub mod array;
pub mod dims;
pub mod maze;
pub mod render;
