pub mod api_utils;
pub mod format;
pub mod random;
pub mod storage;
