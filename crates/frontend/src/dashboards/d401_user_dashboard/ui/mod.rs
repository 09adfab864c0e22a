pub mod dashboard;

pub use dashboard::UserDashboard;
