//! Submit/validate/error-display lifecycle of a form.
//!
//! A [`Form`] wraps the field values of a [`FormModel`] with the state of its
//! request: whether one is in flight, the server's per-field messages and the
//! general failure. It is driven through [`FormAction`]s by `use_reducer`;
//! [`use_submission`] performs the request for every accepted submit.

use crate::error::ApiError;
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::future::Future;
use std::rc::Rc;
use strum::IntoEnumIterator;
use wasm_bindgen_futures::spawn_local;
use yew::{Reducible, UseReducerHandle, hook, use_effect_with};

/// Field values of one form and the rule deciding when they may be sent.
pub trait FormModel: Debug + Clone + Default + PartialEq + 'static {
    /// Identifies an input. `as_ref` must be the key the server uses in
    /// `validationErrors`.
    type Field: Debug + Copy + AsRef<str> + IntoEnumIterator + 'static;
    /// What a successful submission yields.
    type Output: Debug + Clone + PartialEq + 'static;

    fn set(&mut self, field: Self::Field, value: String);

    fn value(&self, field: Self::Field) -> &str;

    /// Whether the values are complete enough to send.
    fn can_submit(&self) -> bool;
}

/// A failure without a per-field message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// Nothing useful came back; show the translated generic message.
    Generic,
    /// The server explained the failure.
    Message(String),
}

impl From<ApiError> for Failure {
    fn from(err: ApiError) -> Self {
        if let Some(message) = err.server_message() {
            return Self::Message(message.to_string());
        }
        log::error!("request failed: {err}");
        Self::Generic
    }
}

pub enum FormAction<M: FormModel> {
    Input(M::Field, String),
    Submit,
    Completed {
        attempt: u32,
        result: Result<M::Output, ApiError>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Form<M: FormModel> {
    pub model: M,
    attempt: u32,
    pending: bool,
    field_errors: BTreeMap<String, String>,
    failure: Option<Failure>,
    outcome: Option<M::Output>,
}

impl<M: FormModel> Default for Form<M> {
    fn default() -> Self {
        Self {
            model: M::default(),
            attempt: 0,
            pending: false,
            field_errors: BTreeMap::new(),
            failure: None,
            outcome: None,
        }
    }
}

impl<M: FormModel> Form<M> {
    /// Number of submits accepted so far.
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn submit_enabled(&self) -> bool {
        !self.pending && self.model.can_submit()
    }

    pub fn value(&self, field: M::Field) -> &str {
        self.model.value(field)
    }

    /// The server's message for `field`, until the user edits it.
    pub fn error_for(&self, field: M::Field) -> Option<&str> {
        self.field_errors.get(field.as_ref()).map(String::as_str)
    }

    pub fn failure(&self) -> Option<&Failure> {
        self.failure.as_ref()
    }

    pub fn outcome(&self) -> Option<&M::Output> {
        self.outcome.as_ref()
    }

    /// Apply `action`, returning whether anything changed.
    pub fn apply(&mut self, action: FormAction<M>) -> bool {
        match action {
            FormAction::Input(field, value) => {
                self.model.set(field, value);
                self.field_errors.remove(field.as_ref());
                true
            }
            FormAction::Submit => {
                if !self.submit_enabled() {
                    return false;
                }
                self.pending = true;
                self.attempt = self.attempt.wrapping_add(1);
                self.failure = None;
                self.field_errors.clear();
                true
            }
            FormAction::Completed { attempt, result } => {
                if !self.pending || attempt != self.attempt {
                    log::debug!("dropping stale completion of attempt {attempt}");
                    return false;
                }
                self.pending = false;
                match result {
                    Ok(output) => self.outcome = Some(output),
                    Err(err) => match shown_field_errors::<M>(&err) {
                        Some(errors) => self.field_errors = errors,
                        None => self.failure = Some(Failure::from(err)),
                    },
                }
                true
            }
        }
    }
}

/// The validation errors of `err`, if at least one belongs to an input of `M`.
/// Messages for keys the form does not render would otherwise go unseen.
fn shown_field_errors<M: FormModel>(err: &ApiError) -> Option<BTreeMap<String, String>> {
    err.field_errors()
        .filter(|errors| M::Field::iter().any(|field| errors.contains_key(field.as_ref())))
        .cloned()
}

impl<M: FormModel> Reducible for Form<M> {
    type Action = FormAction<M>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

/// Send the form once per accepted submit and feed the result back.
///
/// The request is started from an effect keyed on the attempt number, so a
/// submit rejected by the reducer (already pending, incomplete values) never
/// reaches the network.
#[hook]
pub fn use_submission<M, F, Fut>(form: UseReducerHandle<Form<M>>, send: F)
where
    M: FormModel,
    F: FnOnce(M) -> Fut + 'static,
    Fut: Future<Output = Result<M::Output, ApiError>> + 'static,
{
    let attempt = form.attempt();
    use_effect_with(attempt, move |attempt| {
        if *attempt > 0 && form.is_pending() {
            let attempt = *attempt;
            let model = form.model.clone();
            let dispatcher = form.dispatcher();
            spawn_local(async move {
                let result = send(model).await;
                dispatcher.dispatch(FormAction::Completed { attempt, result });
            });
        }
        || ()
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::EnumIter;

    #[derive(Debug, Clone, Copy, EnumIter)]
    enum Field {
        Name,
    }

    impl AsRef<str> for Field {
        fn as_ref(&self) -> &str {
            "name"
        }
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    struct NameForm {
        name: String,
    }

    impl FormModel for NameForm {
        type Field = Field;
        type Output = String;

        fn set(&mut self, _field: Field, value: String) {
            self.name = value;
        }

        fn value(&self, _field: Field) -> &str {
            &self.name
        }

        fn can_submit(&self) -> bool {
            !self.name.is_empty()
        }
    }

    fn filled() -> Form<NameForm> {
        let mut form = Form::default();
        form.apply(FormAction::Input(Field::Name, "user1".to_string()));
        form
    }

    fn complete(form: &mut Form<NameForm>, result: Result<String, ApiError>) -> bool {
        let attempt = form.attempt();
        form.apply(FormAction::Completed { attempt, result })
    }

    #[test]
    fn test_submit_disabled_until_filled() {
        let mut form = Form::<NameForm>::default();
        assert!(!form.submit_enabled());
        assert!(!form.apply(FormAction::Submit));
        assert_eq!(form.attempt(), 0);
        assert!(!form.is_pending());
    }

    #[test]
    fn test_submit_starts_one_attempt() {
        let mut form = filled();
        assert!(form.apply(FormAction::Submit));
        assert!(form.is_pending());
        assert!(!form.submit_enabled());
        assert_eq!(form.attempt(), 1);
    }

    #[test]
    fn test_second_submit_while_pending_is_ignored() {
        let mut form = filled();
        form.apply(FormAction::Submit);
        assert!(!form.apply(FormAction::Submit));
        assert_eq!(form.attempt(), 1);
    }

    #[test]
    fn test_success_records_outcome() {
        let mut form = filled();
        form.apply(FormAction::Submit);
        assert!(complete(&mut form, Ok("User create success".to_string())));
        assert!(!form.is_pending());
        assert_eq!(form.outcome().map(String::as_str), Some("User create success"));
        assert!(form.failure().is_none());
    }

    #[test]
    fn test_network_failure_shows_generic_and_allows_retry() {
        let mut form = filled();
        form.apply(FormAction::Submit);
        complete(&mut form, Err(ApiError::Network("offline".to_string())));
        assert_eq!(form.failure(), Some(&Failure::Generic));
        assert!(!form.is_pending());
        assert!(form.submit_enabled());

        assert!(form.apply(FormAction::Submit));
        assert!(form.failure().is_none());
        assert_eq!(form.attempt(), 2);
    }

    #[test]
    fn test_unexpected_status_shows_generic() {
        let mut form = filled();
        form.apply(FormAction::Submit);
        complete(&mut form, Err(ApiError::Unexpected { status: 500 }));
        assert_eq!(form.failure(), Some(&Failure::Generic));
    }

    #[test]
    fn test_rejection_shows_server_message() {
        let mut form = filled();
        form.apply(FormAction::Submit);
        complete(
            &mut form,
            Err(ApiError::Rejected {
                status: 404,
                message: "Invalid Token".to_string(),
            }),
        );
        assert_eq!(
            form.failure(),
            Some(&Failure::Message("Invalid Token".to_string()))
        );
    }

    #[test]
    fn test_validation_error_cleared_by_editing_field() {
        let mut form = filled();
        form.apply(FormAction::Submit);
        complete(
            &mut form,
            Err(ApiError::Validation(BTreeMap::from([(
                "name".to_string(),
                "Name cannot be null".to_string(),
            )]))),
        );
        assert_eq!(form.error_for(Field::Name), Some("Name cannot be null"));

        form.apply(FormAction::Input(Field::Name, "user1updated".to_string()));
        assert_eq!(form.error_for(Field::Name), None);
        assert_eq!(form.value(Field::Name), "user1updated");
    }

    #[test]
    fn test_validation_errors_for_unknown_fields_show_generic() {
        let mut form = filled();
        form.apply(FormAction::Submit);
        complete(
            &mut form,
            Err(ApiError::Validation(BTreeMap::from([(
                "token".to_string(),
                "Token cannot be null".to_string(),
            )]))),
        );
        assert_eq!(form.failure(), Some(&Failure::Generic));
        assert_eq!(form.error_for(Field::Name), None);
        assert!(!form.is_pending());
    }

    #[test]
    fn test_validation_errors_keep_unknown_keys_next_to_known_ones() {
        let mut form = filled();
        form.apply(FormAction::Submit);
        complete(
            &mut form,
            Err(ApiError::Validation(BTreeMap::from([
                ("name".to_string(), "Name cannot be null".to_string()),
                ("token".to_string(), "Token cannot be null".to_string()),
            ]))),
        );
        assert_eq!(form.error_for(Field::Name), Some("Name cannot be null"));
        assert!(form.failure().is_none());
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut form = filled();
        form.apply(FormAction::Submit);
        complete(&mut form, Err(ApiError::Network("offline".to_string())));
        form.apply(FormAction::Submit);

        let stale = form.apply(FormAction::Completed {
            attempt: 1,
            result: Ok("late".to_string()),
        });
        assert!(!stale);
        assert!(form.is_pending());
        assert!(form.outcome().is_none());
    }

    #[test]
    fn test_failure_from_error() {
        assert_eq!(
            Failure::from(ApiError::Rejected {
                status: 401,
                message: "Incorrect credentials".to_string()
            }),
            Failure::Message("Incorrect credentials".to_string())
        );
        assert_eq!(
            Failure::from(ApiError::Decode("eof".to_string())),
            Failure::Generic
        );
        assert_eq!(
            Failure::from(ApiError::Validation(BTreeMap::new())),
            Failure::Generic
        );
    }

    #[test]
    fn test_completion_without_pending_is_ignored() {
        let mut form = filled();
        assert!(!complete(&mut form, Ok("never sent".to_string())));
        assert!(form.outcome().is_none());
    }

    #[test]
    fn test_reduce_returns_same_rc_when_unchanged() {
        let form = Rc::new(Form::<NameForm>::default());
        let next = Rc::clone(&form).reduce(FormAction::Submit);
        assert!(Rc::ptr_eq(&form, &next));

        let next = next.reduce(FormAction::Input(Field::Name, "a".to_string()));
        assert!(!Rc::ptr_eq(&form, &next));
        assert_eq!(next.value(Field::Name), "a");
    }
}
