pub mod install;
pub mod preview;
pub mod resolve;
