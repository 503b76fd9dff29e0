pub mod finance;
pub mod hero;
pub mod parallax;
