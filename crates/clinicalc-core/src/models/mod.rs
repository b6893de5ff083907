pub mod definition;
pub mod feedback;
pub mod input;
pub mod result;
pub mod risk;
