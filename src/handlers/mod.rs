mod show_handler;

pub use show_handler::*;
