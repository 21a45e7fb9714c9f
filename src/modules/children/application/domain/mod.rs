pub mod entities;
pub mod invitations;
