//! Small rendering helpers shared by the panels.

pub mod glyphs;
