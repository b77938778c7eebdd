pub mod catalogue;
pub mod details;
pub mod mode_switch;
pub mod network;
pub mod panels;
