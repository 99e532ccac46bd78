pub mod api;
pub mod db;
pub mod paths;
pub mod seed;
pub mod serde_utils;
