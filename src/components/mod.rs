pub mod carousel;
pub mod charts;
pub mod motion;
pub mod nav;
