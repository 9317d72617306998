pub mod main_view;
pub mod status_bar;
pub mod theme;
