pub mod observers;
pub mod settings_manager;
