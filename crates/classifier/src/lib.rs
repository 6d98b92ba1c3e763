pub mod errors;
pub mod labels;
pub mod models;
pub mod partition;
pub mod payloads;

pub use errors::ClassifyError;
pub use labels::{decode_labels, has_label, is_bug, BUG_LABEL};
pub use models::{ClassifiedRecords, Label, Record, ThreadComment, ThreadHead};
pub use partition::{classify_record, partition};
pub use payloads::RawRecord;
