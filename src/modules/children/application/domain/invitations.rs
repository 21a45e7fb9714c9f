// Pure admission rules for the partner-invitation state machine:
// none -> pending -> {accepted, rejected}. Transition execution lives in
// the repositories (conditional single-row updates); these functions decide
// whether a new pending invitation may be created at all.
use super::entities::Child;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InviteRuleViolation {
    #[error("You cannot add yourself as a partner.")]
    SelfInvite,
    #[error("Partner parent already exists, delete current partner parent before adding new partner.")]
    PartnerAlreadyAttached,
    #[error("A partner request with this email already exists")]
    DuplicatePendingRequest,
}

/// Checks the invariant set for CreateInvitation: no self-invites, at most
/// one attached partner, at most one pending invitation per invitee email.
pub fn check_new_invitation(
    child: &Child,
    owner_email: &str,
    invitee_email: &str,
) -> Result<(), InviteRuleViolation> {
    if invitee_email == owner_email {
        return Err(InviteRuleViolation::SelfInvite);
    }
    if child.partner_parent_id.is_some() {
        return Err(InviteRuleViolation::PartnerAlreadyAttached);
    }
    if child.pending_request_for(invitee_email).is_some() {
        return Err(InviteRuleViolation::DuplicatePendingRequest);
    }
    Ok(())
}
