// web_app/pages/mod.rs - Page components module
//
// Route-level components:
// - HomePage: hero plus the media grid (also serves /medias)
// - MediaDetailsPage: one media with rating and comments
// - LoginPage / SignUpPage: authentication forms
// - AdminDashboard: admin shell with DashboardHome and UploadPanel

pub mod admin;
pub mod home;
pub mod login;
pub mod media_details;
pub mod signup;

pub use admin::{AdminDashboard, DashboardHome, UploadPanel};
pub use home::HomePage;
pub use login::LoginPage;
pub use media_details::MediaDetailsPage;
pub use signup::SignUpPage;
