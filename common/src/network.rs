pub mod candidate;
pub mod record;
