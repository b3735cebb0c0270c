pub mod filter;
pub mod index;
pub mod normalizer;
pub mod planner;
pub mod resolver;
