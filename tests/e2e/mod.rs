pub mod editing;
pub mod scrolling;
