// Business domains
pub mod product_descriptions;
