pub mod forgot_password;
pub mod login;
pub mod resend_verification;
pub mod reset_password;
pub mod signup;
pub mod update_password;
pub mod verify_email;
