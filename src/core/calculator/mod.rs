pub mod category;
pub mod focus;
pub mod free_time;
pub mod important;
pub mod normalizer;
pub mod window;
