use super::domain::User;

/// Cheap syntactic email check.
///
/// Requires an `@` that is not the first character, and a last `.` that sits
/// at least two bytes after the `@` and is not the final character. Anything
/// else (several `@`, odd domain characters) is accepted.
pub fn validate_email(email: &str) -> bool {
    if email.len() < 3 {
        return false;
    }
    let at_index = match email.find('@') {
        Some(index) if index >= 1 => index,
        _ => return false,
    };
    let dot_index = match email.rfind('.') {
        Some(index) if index >= at_index + 2 => index,
        _ => return false,
    };
    dot_index < email.len() - 1
}

pub fn format_user_display(user: &User) -> String {
    if user.name.is_empty() {
        format!("User #{} (no name)", user.id)
    } else {
        format!("{} <{}>", user.name, user.email)
    }
}
