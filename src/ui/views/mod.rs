pub mod notifications;
pub mod week_menu;
pub mod week_page;
pub mod welcome;
