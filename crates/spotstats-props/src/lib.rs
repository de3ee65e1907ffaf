// Prop engine: scoring, tiering, summarizing, assembling and ranking player
// props for a game. Pure functions over already-loaded datasets; no I/O.

pub mod entry;
pub mod scoring;
pub mod summary;
pub mod tier;
pub mod view;

pub use entry::{assemble, build_entry, PropEntry, Side};
pub use scoring::score;
pub use summary::summarize;
pub use tier::{classify, Tier};
pub use view::{view, FilteredView, TierFilter};
