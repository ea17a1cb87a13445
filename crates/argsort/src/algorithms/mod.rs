pub mod bucket_argsort;
pub mod common;
pub mod counting_argsort;
pub mod insertion_argsort;
pub mod quick_argsort;
pub mod radix_argsort;
