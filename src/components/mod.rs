//! Site chrome shared by every page.

pub mod footer;
pub mod nav;
pub mod page_transition;
pub mod particle_field;
