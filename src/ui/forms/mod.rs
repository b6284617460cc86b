//! Form rendering module
//!
//! - `field_renderer`: text fields and the tone selector
//! - `star_form`: the sectioned, scrolling form

mod field_renderer;
mod star_form;

pub use star_form::draw as draw_star_form;
