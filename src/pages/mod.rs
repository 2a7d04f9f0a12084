pub mod about;
pub mod fundraise;
pub mod market;
pub mod overview;
pub mod roadmap;
pub mod scale;
