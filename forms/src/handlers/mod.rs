pub mod form;
pub mod indexer;
