pub mod audit;
pub mod order;
