//! Small DOM-adjacent helpers with pure, testable cores.

pub mod scroll;
