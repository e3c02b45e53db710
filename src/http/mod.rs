pub mod client;
pub mod url;
