//! Form validation shared by the login, signup and profile pages.
//!
//! Each check returns the message shown to the user on failure, so pages can
//! push it straight into a notice.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Loose shape check: `local@domain.tld`, no whitespace, exactly one `@`.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

pub fn check_email(email: &str) -> Result<(), &'static str> {
    if is_valid_email(email.trim()) {
        Ok(())
    } else {
        Err("Please enter a valid email address.")
    }
}

pub fn check_passwords_match(password: &str, confirm: &str) -> Result<(), &'static str> {
    if password == confirm { Ok(()) } else { Err("Passwords do not match") }
}

pub fn check_password_length(password: &str) -> Result<(), &'static str> {
    if password.chars().count() >= MIN_PASSWORD_LEN {
        Ok(())
    } else {
        Err("Password must be at least 6 characters")
    }
}

pub fn check_username(username: &str) -> Result<(), &'static str> {
    if username.trim().is_empty() { Err("Username cannot be empty") } else { Ok(()) }
}

/// Signup form: username, email shape, then the password pair.
pub fn validate_signup(username: &str, email: &str, password: &str, confirm: &str) -> Result<(), &'static str> {
    check_username(username)?;
    check_email(email)?;
    check_passwords_match(password, confirm)?;
    check_password_length(password)
}

/// Profile password change. Both new fields are required.
pub fn validate_password_change(current: &str, new: &str, confirm: &str) -> Result<(), &'static str> {
    if current.is_empty() {
        return Err("Current password is required");
    }
    if new.is_empty() || confirm.is_empty() {
        return Err("New password and confirmation are required");
    }
    check_passwords_match(new, confirm)?;
    check_password_length(new)
}
