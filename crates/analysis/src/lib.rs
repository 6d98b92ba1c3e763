pub mod linker;
pub mod mentions;
pub mod stats;

pub use linker::link_bug_mentions;
pub use mentions::extract_mentions;
pub use stats::{label_statistics, LabelStat};
