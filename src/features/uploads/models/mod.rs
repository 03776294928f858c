mod media_record;

pub use media_record::{MediaRecord, NewMediaRecord};
