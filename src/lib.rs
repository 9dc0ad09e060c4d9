pub mod io;
pub mod problems;
