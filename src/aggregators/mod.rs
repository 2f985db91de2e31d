pub mod daily;
pub mod processor;

// Re-export commonly used types
pub use daily::{DailyAverage, DayBucket, aggregate_daily, bucket_by_day, round_half_up_2};
pub use processor::DailyAggregator;
