pub mod download;
pub mod home;
pub mod login;

pub use download::DownloadPage;
pub use home::HomePage;
pub use login::LoginPage;
