pub mod orbit_catalog;
pub mod transition;
