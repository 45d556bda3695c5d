/// Module containing the [`DoubleEnded`] trait.
pub mod double_ended;

pub use double_ended::DoubleEnded;
