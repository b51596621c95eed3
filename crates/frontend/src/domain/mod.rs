pub mod a001_promotion;
pub mod a002_order;
