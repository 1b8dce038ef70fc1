pub mod created_at;

pub use created_at::{parse_created_at, ranking_timestamp_millis};
