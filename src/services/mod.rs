pub mod email;
pub mod validation;
