pub mod accept_partner;
pub mod add_partner;
pub mod add_recommendation;
pub mod create_child;
pub mod delete_all_recommendations;
pub mod delete_child;
pub mod delete_recommendation;
pub mod fetch_child;
pub mod fetch_children;
pub mod fetch_partner_child;
pub mod fetch_partner_children;
pub mod reject_partner;
pub mod remove_partner;
pub mod resend_partner;
pub mod update_child;
