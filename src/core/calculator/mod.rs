pub mod cost;

pub use cost::calculate_cost;
