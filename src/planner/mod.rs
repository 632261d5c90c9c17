// Page painters of the yearly planner.
//
// Every planner page except the cover carries the same chrome: background,
// title, the Calendar / Summary / Tracker tabs and the month side tabs.

pub mod cover;
pub mod daily;
pub mod monthly;
pub mod overview;
pub mod summary;
pub mod tracker;
