pub mod airfoil;
pub mod errors;
pub mod plot;
pub mod serialize;
pub mod solver;
