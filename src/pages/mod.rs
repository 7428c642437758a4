pub mod booking_confirmation;
pub mod dashboard;
pub mod home;
pub mod login;

pub use booking_confirmation::BookingConfirmationPage;
pub use dashboard::AdminDashboardPage;
pub use home::HomePage;
pub use login::LoginPage;
