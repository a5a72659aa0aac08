pub mod awareness;
pub mod classifier;
pub mod rolling_smoother;
