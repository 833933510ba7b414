use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
/// Credentials posted by the sign-in form.
pub struct SignInForm {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}
