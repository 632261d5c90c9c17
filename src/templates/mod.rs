// Single-purpose note templates: a summary page followed by a dotted
// notes page.

pub mod bi_requirements;
pub mod meeting_notes;
