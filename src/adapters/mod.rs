pub mod filesystem;
pub mod git;
pub mod random;
