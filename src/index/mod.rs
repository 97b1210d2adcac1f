pub mod index_writer;
pub mod inverted;
pub mod merge;
pub mod posting;
