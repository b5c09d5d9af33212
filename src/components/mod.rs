pub mod app;
pub mod dashboard;
pub mod header;
pub mod login_screen;
pub mod principal;
pub mod register_view;
pub mod role_toggle;
pub mod room_card;
pub mod settings_popup;
pub mod user_management;
pub mod user_modal;

pub use app::App;
pub use dashboard::Dashboard;
pub use header::Header;
pub use login_screen::LoginScreen;
pub use principal::Principal;
pub use register_view::RegisterView;
pub use role_toggle::RoleToggle;
pub use room_card::RoomCard;
pub use settings_popup::SettingsPopup;
pub use user_management::UserManagement;
pub use user_modal::UserModal;
