// Performance tracking domain
pub mod summary;
