use serde::{Deserialize, Serialize};

/// Logged-in employee identity, read from client-side storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSession {
    pub user_id: Option<i64>,
    pub user_name: Option<String>,
}

/// `PUT /admin/employee/editPassword` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordPayload {
    pub emp_id: i64,
    pub old_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordField {
    Old,
    New,
    Confirm,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordErrors {
    pub old_password: Option<String>,
    pub new_password: Option<String>,
    pub confirm_password: Option<String>,
}

impl PasswordErrors {
    pub fn is_clean(&self) -> bool {
        self.old_password.is_none()
            && self.new_password.is_none()
            && self.confirm_password.is_none()
    }
}

/// Per-field "has blurred" markers gating error visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordTouched {
    pub old_password: bool,
    pub new_password: bool,
    pub confirm_password: bool,
}

impl PasswordTouched {
    pub fn mark_all(&mut self) {
        *self = Self {
            old_password: true,
            new_password: true,
            confirm_password: true,
        };
    }
}

/// Change-password dialog buffer.
///
/// The confirm field is always cross-checked against the latest typed
/// new-password value, never a snapshot taken earlier, so editing
/// either field immediately clears or reinstates the mismatch error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordForm {
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
    pub errors: PasswordErrors,
    pub touched: PasswordTouched,
}

impl PasswordForm {
    pub fn set_old_password(&mut self, value: String) {
        self.old_password = value;
        self.errors.old_password = None;
    }

    pub fn set_new_password(&mut self, value: String) {
        self.new_password = value;
        self.errors.new_password = None;
        if !self.confirm_password.is_empty() {
            self.errors.confirm_password =
                validate_confirm(&self.confirm_password, &self.new_password);
        }
    }

    pub fn set_confirm_password(&mut self, value: String) {
        self.confirm_password = value;
        self.errors.confirm_password = None;
    }

    /// Blur validation; marks the field touched so its error shows.
    pub fn blur(&mut self, field: PasswordField) {
        match field {
            PasswordField::Old => {
                self.touched.old_password = true;
                self.errors.old_password = validate_old_password(&self.old_password);
            }
            PasswordField::New => {
                self.touched.new_password = true;
                self.errors.new_password = validate_new_password(&self.new_password);
            }
            PasswordField::Confirm => {
                self.touched.confirm_password = true;
                self.errors.confirm_password =
                    validate_confirm(&self.confirm_password, &self.new_password);
            }
        }
    }

    /// Full re-validation on submit, regardless of touched state.
    /// On failure every field is marked touched so all errors show.
    pub fn submit_check(&mut self) -> bool {
        self.errors = PasswordErrors {
            old_password: validate_old_password(&self.old_password),
            new_password: validate_new_password(&self.new_password),
            confirm_password: validate_confirm(&self.confirm_password, &self.new_password),
        };
        if self.errors.is_clean() {
            true
        } else {
            self.touched.mark_all();
            false
        }
    }

    /// Error text for display, gated by the touched flag.
    pub fn visible_error(&self, field: PasswordField) -> Option<&str> {
        let (touched, error) = match field {
            PasswordField::Old => (self.touched.old_password, &self.errors.old_password),
            PasswordField::New => (self.touched.new_password, &self.errors.new_password),
            PasswordField::Confirm => {
                (self.touched.confirm_password, &self.errors.confirm_password)
            }
        };
        if touched {
            error.as_deref()
        } else {
            None
        }
    }

    pub fn payload(&self, emp_id: i64) -> PasswordPayload {
        PasswordPayload {
            emp_id,
            old_password: self.old_password.clone(),
            new_password: self.new_password.clone(),
        }
    }
}

pub fn validate_old_password(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some("原始密码不能为空".to_string());
    }
    None
}

pub fn validate_new_password(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some("新密码不能为空".to_string());
    }
    let len = value.chars().count();
    if !(6..=20).contains(&len) {
        return Some("密码长度必须在6-20位之间".to_string());
    }
    if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Some("密码只能包含数字或字母".to_string());
    }
    None
}

/// Compared against the latest new-password value; the mismatch check
/// is skipped while the new password is still empty.
pub fn validate_confirm(value: &str, latest_new: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some("确认密码不能为空".to_string());
    }
    if !latest_new.is_empty() && value != latest_new {
        return Some("两次输入的密码不一致".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_password_rules() {
        assert!(validate_new_password("").is_some());
        assert!(validate_new_password("abc12").is_some()); // too short
        assert!(validate_new_password(&"a".repeat(21)).is_some()); // too long
        assert!(validate_new_password("abc 123").is_some()); // space
        assert!(validate_new_password("密码密码密码").is_some()); // non-ascii
        assert_eq!(validate_new_password("abc123"), None);
        assert_eq!(validate_new_password(&"Z9".repeat(10)), None); // exactly 20
    }

    #[test]
    fn test_confirm_tracks_latest_new_value() {
        let mut form = PasswordForm::default();
        form.set_new_password("abc123".to_string());
        form.set_confirm_password("abc124".to_string());
        form.blur(PasswordField::Confirm);
        assert_eq!(
            form.visible_error(PasswordField::Confirm),
            Some("两次输入的密码不一致")
        );

        // Fixing the NEW password clears the confirm error immediately,
        // without re-blurring the confirm field.
        form.set_new_password("abc124".to_string());
        assert_eq!(form.visible_error(PasswordField::Confirm), None);

        // And typing a diverging new password reinstates it.
        form.set_new_password("abc999".to_string());
        assert_eq!(
            form.visible_error(PasswordField::Confirm),
            Some("两次输入的密码不一致")
        );
    }

    #[test]
    fn test_errors_hidden_until_touched() {
        let mut form = PasswordForm::default();
        form.errors.old_password = Some("原始密码不能为空".to_string());
        assert_eq!(form.visible_error(PasswordField::Old), None);
        form.touched.old_password = true;
        assert!(form.visible_error(PasswordField::Old).is_some());
    }

    #[test]
    fn test_submit_check_marks_all_touched_on_failure() {
        let mut form = PasswordForm::default();
        assert!(!form.submit_check());
        assert!(form.touched.old_password);
        assert!(form.touched.new_password);
        assert!(form.touched.confirm_password);
        assert!(form.visible_error(PasswordField::New).is_some());
    }

    #[test]
    fn test_valid_form_builds_payload() {
        let mut form = PasswordForm::default();
        form.set_old_password("old123".to_string());
        form.set_new_password("new456".to_string());
        form.set_confirm_password("new456".to_string());
        assert!(form.submit_check());

        let json = serde_json::to_value(form.payload(12)).unwrap();
        assert_eq!(json["empId"], 12);
        assert_eq!(json["oldPassword"], "old123");
        assert_eq!(json["newPassword"], "new456");
    }
}
