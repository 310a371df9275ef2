pub mod domain;

pub use domain::{NewShow, Show, ShowFields};
