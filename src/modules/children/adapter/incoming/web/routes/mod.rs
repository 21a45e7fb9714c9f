mod accept_partner;
mod add_partner;
mod add_recommendation;
mod create_child;
mod delete_all_recommendations;
mod delete_child;
mod delete_recommendation;
mod fetch_child;
mod fetch_children;
mod fetch_partner_child;
mod fetch_partner_children;
mod reject_partner;
mod remove_partner;
mod resend_partner;
mod update_child;

pub use accept_partner::accept_partner_handler;
pub use add_partner::{add_partner_handler, AddPartnerBody};
pub use add_recommendation::{add_recommendation_handler, AddRecommendationBody};
pub use create_child::{create_child_handler, CreateChildBody};
pub use delete_all_recommendations::delete_all_recommendations_handler;
pub use delete_child::delete_child_handler;
pub use delete_recommendation::delete_recommendation_handler;
pub use fetch_child::fetch_child_handler;
pub use fetch_children::fetch_children_handler;
pub use fetch_partner_child::fetch_partner_child_handler;
pub use fetch_partner_children::fetch_partner_children_handler;
pub use reject_partner::reject_partner_handler;
pub use remove_partner::remove_partner_handler;
pub use resend_partner::{resend_partner_handler, ResendPartnerBody};
pub use update_child::{update_child_handler, UpdateChildBody};

pub use accept_partner::{__path_accept_partner_handler};
pub use add_partner::{__path_add_partner_handler};
pub use add_recommendation::{__path_add_recommendation_handler};
pub use create_child::{__path_create_child_handler};
pub use delete_all_recommendations::{__path_delete_all_recommendations_handler};
pub use delete_child::{__path_delete_child_handler};
pub use delete_recommendation::{__path_delete_recommendation_handler};
pub use fetch_child::{__path_fetch_child_handler};
pub use fetch_children::{__path_fetch_children_handler};
pub use fetch_partner_child::{__path_fetch_partner_child_handler};
pub use fetch_partner_children::{__path_fetch_partner_children_handler};
pub use reject_partner::{__path_reject_partner_handler};
pub use remove_partner::{__path_remove_partner_handler};
pub use resend_partner::{__path_resend_partner_handler};
pub use update_child::{__path_update_child_handler};
