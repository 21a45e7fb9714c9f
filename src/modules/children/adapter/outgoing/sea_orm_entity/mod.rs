pub mod children;
pub mod partner_requests;
pub mod recommendations;
