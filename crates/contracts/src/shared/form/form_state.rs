use super::validation::FieldError;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Per-field validation function, resolved at compile time
pub type Validator<T> = fn(&T) -> Result<(), FieldError>;

/// A record a [`FormState`] can hold
pub trait FormRecord: Clone {
    /// Field keys of the record
    type Field: Copy + Eq + Hash + Debug + 'static;

    /// Edits the record understands
    type Action;

    /// All fields, in display order
    fn fields() -> &'static [Self::Field];

    /// Validation function of a field
    fn validator(field: Self::Field) -> Validator<Self>;

    /// Field an action edits
    fn action_field(action: &Self::Action) -> Self::Field;

    /// Reducer: next record after `action`
    fn apply(&self, action: &Self::Action) -> Self;
}

/// Holds one record plus its per-field error state
#[derive(Debug, Clone)]
pub struct FormState<T: FormRecord> {
    values: T,
    errors: HashMap<T::Field, FieldError>,
}

impl<T: FormRecord> FormState<T> {
    pub fn new(values: T) -> Self {
        Self {
            values,
            errors: HashMap::new(),
        }
    }

    /// Current record
    pub fn values(&self) -> &T {
        &self.values
    }

    /// Apply an edit, then revalidate the field it touched
    pub fn dispatch(&mut self, action: T::Action) {
        let field = T::action_field(&action);
        self.values = self.values.apply(&action);
        let _ = self.validate_field(field);
    }

    /// Run one field's validator and record the outcome
    fn validate_field(&mut self, field: T::Field) -> Result<(), FieldError> {
        match (T::validator(field))(&self.values) {
            Ok(()) => {
                self.errors.remove(&field);
                Ok(())
            }
            Err(err) => {
                self.errors.insert(field, err.clone());
                Err(err)
            }
        }
    }

    /// Validate every field; returns the failures in field order
    pub fn validate_all(&mut self) -> Vec<FieldError> {
        T::fields()
            .iter()
            .filter_map(|&field| self.validate_field(field).err())
            .collect()
    }

    pub fn error(&self, field: T::Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Validate everything and hand the full record to `on_submit` when it
    /// passes. On failure the callback is not invoked and the errors are
    /// returned (and kept for display).
    pub fn handle_submit<F>(&mut self, on_submit: F) -> Result<(), Vec<FieldError>>
    where
        F: FnOnce(T),
    {
        let errors = self.validate_all();
        if !errors.is_empty() {
            return Err(errors);
        }
        on_submit(self.values.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Login {
        name: String,
        note: String,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum LoginField {
        Name,
        Note,
    }

    enum LoginAction {
        SetName(String),
        SetNote(String),
    }

    fn name_required(l: &Login) -> Result<(), FieldError> {
        if l.name.is_empty() {
            Err(FieldError::new("name", "Name is required"))
        } else {
            Ok(())
        }
    }

    fn always_ok(_: &Login) -> Result<(), FieldError> {
        Ok(())
    }

    impl FormRecord for Login {
        type Field = LoginField;
        type Action = LoginAction;

        fn fields() -> &'static [LoginField] {
            &[LoginField::Name, LoginField::Note]
        }

        fn validator(field: LoginField) -> Validator<Self> {
            match field {
                LoginField::Name => name_required,
                LoginField::Note => always_ok,
            }
        }

        fn action_field(action: &LoginAction) -> LoginField {
            match action {
                LoginAction::SetName(_) => LoginField::Name,
                LoginAction::SetNote(_) => LoginField::Note,
            }
        }

        fn apply(&self, action: &LoginAction) -> Self {
            let mut next = self.clone();
            match action {
                LoginAction::SetName(v) => next.name = v.clone(),
                LoginAction::SetNote(v) => next.note = v.clone(),
            }
            next
        }
    }

    fn blank() -> FormState<Login> {
        FormState::new(Login {
            name: String::new(),
            note: String::new(),
        })
    }

    #[test]
    fn test_dispatch_validates_touched_field_only() {
        let mut form = blank();
        form.dispatch(LoginAction::SetNote("hi".into()));
        assert!(form.error(LoginField::Name).is_none());

        form.dispatch(LoginAction::SetName(String::new()));
        assert!(form.error(LoginField::Name).is_some());

        form.dispatch(LoginAction::SetName("kadam".into()));
        assert!(form.error(LoginField::Name).is_none());
        assert!(form.validate_all().is_empty());
    }

    #[test]
    fn test_submit_blocked_while_invalid() {
        let mut form = blank();
        let mut submitted = None;
        let result = form.handle_submit(|v| submitted = Some(v));
        assert!(submitted.is_none());
        assert_eq!(result.unwrap_err().len(), 1);
        assert!(form.error(LoginField::Name).is_some());
    }

    #[test]
    fn test_submit_hands_over_snapshot() {
        let mut form = blank();
        form.dispatch(LoginAction::SetName("kadam".into()));
        let mut submitted = None;
        assert!(form.handle_submit(|v| submitted = Some(v)).is_ok());
        assert_eq!(submitted.map(|l| l.name), Some("kadam".to_string()));
    }
}
