pub mod launch_sequence;
pub mod timeline;
