pub mod offset;
pub mod plan;
pub mod search;
pub mod visibility;
