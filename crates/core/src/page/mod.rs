//! Page controller - runs the session gate and the page's views on every auth change.

mod page_controller;


pub use page_controller::{PageController, PageOutcome};
