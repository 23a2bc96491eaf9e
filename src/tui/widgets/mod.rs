pub mod controls;
pub mod header;
pub mod notification;
pub mod prayers;
pub mod statusbar;
