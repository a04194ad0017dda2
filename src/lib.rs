pub mod config;
pub mod logger;
pub mod error;
pub mod content;
pub mod hasher;
pub mod path_gen;
pub mod normalizer;
pub mod post_store;
pub mod synchronizer;
pub mod snapshot;
pub mod source_list;
pub mod generator;
pub mod text_utils;
pub mod util;
mod test_data;
