mod generator;
mod solver;

pub use generator::RecursiveBacktracker;
pub use solver::DfsSolver;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;
