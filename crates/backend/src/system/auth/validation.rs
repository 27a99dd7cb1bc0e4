use contracts::system::auth::{FieldError, LoginRequest};
use serde_json::Value;

pub const EMAIL_REQUIRED: &str = "O e-mail é obrigatório.";
pub const EMAIL_INVALID: &str = "Informe um e-mail válido.";
pub const PASSWORD_REQUIRED: &str = "A senha é obrigatória.";
pub const PASSWORD_INVALID: &str = "A senha deve ser um texto.";

/// Builds a validated login request from an arbitrary JSON body.
///
/// Absent or `null` fields count as missing, other non-string values are
/// invalid. A body that is not an object has no fields at all.
pub fn parse_login(body: &Value) -> Result<LoginRequest, Vec<FieldError>> {
    let mut errors = Vec::new();
    let email = string_field(body, "email", EMAIL_INVALID, &mut errors);
    let password = string_field(body, "password", PASSWORD_INVALID, &mut errors);

    let request = LoginRequest { email, password };
    if let Err(field_errors) = validate_login(&request) {
        // A mistyped field already has its error
        let missing: Vec<FieldError> = field_errors
            .into_iter()
            .filter(|e| !errors.iter().any(|seen| seen.path == e.path))
            .collect();
        errors.extend(missing);
    }

    if errors.is_empty() {
        Ok(request)
    } else {
        errors.sort_by_key(|e| e.path != "email");
        Err(errors)
    }
}

fn string_field(
    body: &Value,
    name: &str,
    invalid: &str,
    errors: &mut Vec<FieldError>,
) -> String {
    match body.get(name) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(value)) => value.clone(),
        Some(_) => {
            errors.push(FieldError::body(name, invalid));
            String::new()
        }
    }
}

/// Checks the login body, collecting every failing field.
pub fn validate_login(request: &LoginRequest) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    let email = request.email.trim();
    if email.is_empty() {
        errors.push(FieldError::body("email", EMAIL_REQUIRED));
    } else if !is_valid_email(email) {
        errors.push(FieldError::body("email", EMAIL_INVALID));
    }

    if request.password.is_empty() {
        errors.push(FieldError::body("password", PASSWORD_REQUIRED));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// `local@domain.tld` with no whitespace and non-empty domain labels.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || !domain.contains('.') {
        return false;
    }
    domain.split('.').all(|label| !label.is_empty())
}
