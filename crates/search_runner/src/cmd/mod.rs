pub mod options;
pub mod search;
