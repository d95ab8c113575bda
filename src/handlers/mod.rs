pub mod product;
pub mod system;
