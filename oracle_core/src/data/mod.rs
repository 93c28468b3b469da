//! Data model for draw records, the bounded archive, and feedback events.

pub mod archive;
pub mod feedback;
pub mod sequence;

pub use archive::{DrawArchive, DEFAULT_ARCHIVE_CAPACITY};
pub use feedback::{HitKind, HitRecord, HitStatus, RectificationRecord};
pub use sequence::{
    DataSet, Sequence, DIGIT_SPAN, HEAD_ROW_LEN, ROWS_PER_SET, TAIL_ROW_LEN, TRACKED_COLUMNS,
};
