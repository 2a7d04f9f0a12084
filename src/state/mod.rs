pub mod deck;
pub mod store;
pub mod theme;
pub mod view;
