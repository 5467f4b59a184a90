use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  sam@example.com ", "hunter22"),
        Ok(("sam@example.com".to_owned(), "hunter22".to_owned()))
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    assert_eq!(
        validate_login_input("sam", " pass word "),
        Ok(("sam".to_owned(), " pass word ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_email() {
    assert_eq!(validate_login_input("   ", "secret"), Err("Email or username is required."));
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(validate_login_input("sam@example.com", ""), Err("Password is required."));
    assert_eq!(validate_login_input("sam@example.com", "   "), Err("Password is required."));
}
