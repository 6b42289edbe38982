pub mod bridge;
pub mod extract;
pub mod selectors;
pub mod track;
