//! Game implementations.

pub mod uttt;
