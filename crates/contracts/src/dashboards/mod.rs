pub mod d400_admin_overview;
pub mod d401_user_dashboard;
