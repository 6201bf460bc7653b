use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use super::fields::{FieldKey, FormFields};
use super::form::{
    ContactForm, DismissTicket, FormSnapshot, SubmissionError, SubmissionState, SubmitStart,
};
use super::validation::ValidationErrors;

/// Delivers a validated contact message somewhere.
pub trait ContactSender {
    fn send(&self, fields: FormFields) -> impl Future<Output = Result<(), SubmissionError>>;
}

#[derive(Debug, Clone)]
pub struct ContactSettings {
    /// How long the success acknowledgement stays up before it is dismissed.
    pub success_display: Duration,
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            success_display: Duration::from_secs(5),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Blocked,
    /// Another submission was already in flight.
    Ignored,
    /// Sent. The ticket belongs to the success acknowledgement now showing.
    Succeeded(DismissTicket),
    /// The sender reported an error; fields are kept for a retry.
    Failed(SubmissionError),
}

/// Hands a freshly scheduled dismissal timer to `store`. When the view that
/// owns the timer is gone, `store` gives the handle back and it is cancelled.
/// Returns whether the timer was kept.
pub fn retain_timer<H>(
    handle: H,
    store: impl FnOnce(H) -> Option<H>,
    cancel: impl FnOnce(H),
) -> bool {
    match store(handle) {
        None => true,
        Some(rejected) => {
            cancel(rejected);
            false
        }
    }
}

type Observer = Arc<dyn Fn(&FormSnapshot) + Send + Sync>;

/// Drives a [`ContactForm`] against a [`ContactSender`] and reports every
/// change to an optional observer.
pub struct ContactFormController<S> {
    form: Arc<Mutex<ContactForm>>,
    sender: Arc<S>,
    settings: ContactSettings,
    observer: Option<Observer>,
}

impl<S> Clone for ContactFormController<S> {
    fn clone(&self) -> Self {
        Self {
            form: Arc::clone(&self.form),
            sender: Arc::clone(&self.sender),
            settings: self.settings.clone(),
            observer: self.observer.clone(),
        }
    }
}

impl<S: ContactSender> ContactFormController<S> {
    pub fn new(sender: S) -> Self {
        Self {
            form: Arc::new(Mutex::new(ContactForm::new())),
            sender: Arc::new(sender),
            settings: ContactSettings::default(),
            observer: None,
        }
    }

    pub fn with_settings(mut self, settings: ContactSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_observer(
        mut self,
        observer: impl Fn(&FormSnapshot) + Send + Sync + 'static,
    ) -> Self {
        self.observer = Some(Arc::new(observer));
        self
    }

    pub fn settings(&self) -> &ContactSettings {
        &self.settings
    }

    fn lock(&self) -> MutexGuard<'_, ContactForm> {
        self.form.lock().expect("should be able to lock contact form")
    }

    fn notify(&self, snapshot: FormSnapshot) {
        if let Some(observer) = &self.observer {
            observer(&snapshot);
        }
    }

    /// Applies `f` to the form and notifies the observer after the lock is released.
    fn mutate<T>(&self, f: impl FnOnce(&mut ContactForm) -> T) -> T {
        let (out, snapshot) = {
            let mut form = self.lock();
            let out = f(&mut form);
            (out, form.snapshot())
        };
        self.notify(snapshot);
        out
    }

    pub fn snapshot(&self) -> FormSnapshot {
        self.lock().snapshot()
    }

    pub fn state(&self) -> SubmissionState {
        self.lock().state()
    }

    pub fn validate(&self) -> ValidationErrors {
        self.lock().validate()
    }

    pub fn update_field(&self, key: FieldKey, value: String) {
        self.mutate(|form| form.update_field(key, value));
    }

    pub fn dismiss_success(&self) {
        self.mutate(ContactForm::dismiss_success);
    }

    /// Called when a dismissal timer fires. Stale tickets are ignored.
    pub fn expire(&self, ticket: DismissTicket) -> bool {
        self.mutate(|form| form.expire(ticket))
    }

    /// Validates and, if valid, sends the form. At most one send is in flight
    /// at a time; calls made meanwhile return [`SubmitOutcome::Ignored`].
    pub async fn submit(&self) -> SubmitOutcome {
        let fields = match self.mutate(ContactForm::begin_submit) {
            SubmitStart::Blocked => {
                log::debug!("contact form submission blocked by validation");
                return SubmitOutcome::Blocked;
            }
            SubmitStart::InFlight => {
                log::debug!("contact form submission already in flight");
                return SubmitOutcome::Ignored;
            }
            SubmitStart::Started(fields) => fields,
        };

        match self.sender.send(fields).await {
            Ok(()) => match self.mutate(|form| form.finish_submit(Ok(()))) {
                Some(ticket) => SubmitOutcome::Succeeded(ticket),
                None => SubmitOutcome::Ignored,
            },
            Err(e) => {
                log::warn!("contact form submission failed: {e}");
                self.mutate(|form| form.finish_submit(Err(e.clone())));
                SubmitOutcome::Failed(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use tokio::sync::Notify;

    use super::*;

    #[derive(Default)]
    struct CountingSender {
        calls: AtomicUsize,
        sent: Mutex<Vec<FormFields>>,
        fail_with: Option<SubmissionError>,
        gate: Option<Arc<Notify>>,
    }

    impl ContactSender for CountingSender {
        async fn send(&self, fields: FormFields) -> Result<(), SubmissionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.sent.lock().unwrap().push(fields);
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            match &self.fail_with {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }
    }

    fn fill(controller: &ContactFormController<CountingSender>) {
        controller.update_field(FieldKey::Name, "Jo".to_string());
        controller.update_field(FieldKey::Email, "jo@example.com".to_string());
        controller.update_field(FieldKey::Message, "hello there".to_string());
    }

    #[tokio::test]
    async fn test_valid_submit_succeeds_and_resets() {
        let states = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&states);
        let controller = ContactFormController::new(CountingSender::default())
            .with_observer(move |s| seen.lock().unwrap().push(s.state));
        fill(&controller);

        let outcome = controller.submit().await;
        let ticket = match outcome {
            SubmitOutcome::Succeeded(t) => t,
            other => panic!("expected success, got {other:?}"),
        };

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.state, SubmissionState::Succeeded);
        assert!(snapshot.fields.is_empty());
        assert!(snapshot.errors.is_empty());

        let observed = states.lock().unwrap().clone();
        assert!(observed.ends_with(&[SubmissionState::Submitting, SubmissionState::Succeeded]));

        assert!(controller.expire(ticket));
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert!(controller.snapshot().errors.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_submit_never_sends() {
        let controller = ContactFormController::new(CountingSender::default());
        controller.update_field(FieldKey::Email, "a@b.com".to_string());
        controller.update_field(FieldKey::Message, "hello there".to_string());

        assert_eq!(controller.submit().await, SubmitOutcome::Blocked);
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert_eq!(
            controller.snapshot().errors.message(FieldKey::Name).as_deref(),
            Some("Name is required")
        );
        assert_eq!(controller.sender.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_concurrent_submits_send_once() {
        let gate = Arc::new(Notify::new());
        let sender = CountingSender {
            gate: Some(Arc::clone(&gate)),
            ..Default::default()
        };
        let controller = ContactFormController::new(sender);
        fill(&controller);

        let first = controller.submit();
        let second = async {
            // first submit is parked on the gate by now
            tokio::task::yield_now().await;
            assert_eq!(controller.state(), SubmissionState::Submitting);
            let outcome = controller.submit().await;
            gate.notify_one();
            outcome
        };
        let (first, second) = tokio::join!(first, second);

        assert!(matches!(first, SubmitOutcome::Succeeded(_)));
        assert_eq!(second, SubmitOutcome::Ignored);
        assert_eq!(controller.sender.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_send_keeps_fields() {
        let err = SubmissionError::Transport("connection refused".to_string());
        let sender = CountingSender {
            fail_with: Some(err.clone()),
            ..Default::default()
        };
        let controller = ContactFormController::new(sender);
        fill(&controller);

        assert_eq!(controller.submit().await, SubmitOutcome::Failed(err.clone()));
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.state, SubmissionState::Failed);
        assert_eq!(snapshot.notice, Some(err));
        assert_eq!(snapshot.fields.name, "Jo");
        assert_eq!(snapshot.fields.message, "hello there");
    }

    #[tokio::test]
    async fn test_sender_receives_fields() {
        let controller = ContactFormController::new(CountingSender::default());
        fill(&controller);
        controller.update_field(FieldKey::Subject, "Project Inquiry".to_string());

        controller.submit().await;

        let sent = controller.sender.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "Project Inquiry");
        assert_eq!(sent[0].email, "jo@example.com");
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_dismissed_after_display_interval() {
        let controller = ContactFormController::new(CountingSender::default());
        fill(&controller);

        let SubmitOutcome::Succeeded(ticket) = controller.submit().await else {
            panic!("expected success");
        };

        let timer = {
            let controller = controller.clone();
            let display = controller.settings().success_display;
            tokio::spawn(async move {
                tokio::time::sleep(display).await;
                controller.expire(ticket)
            })
        };

        tokio::time::sleep(Duration::from_secs(4)).await;
        assert_eq!(controller.state(), SubmissionState::Succeeded);

        assert!(timer.await.unwrap());
        assert_eq!(controller.state(), SubmissionState::Idle);
    }

    #[tokio::test]
    async fn test_edit_before_timer_cancels_dismissal() {
        let controller = ContactFormController::new(CountingSender::default());
        fill(&controller);
        let SubmitOutcome::Succeeded(ticket) = controller.submit().await else {
            panic!("expected success");
        };

        controller.update_field(FieldKey::Name, "A".to_string());
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert!(!controller.expire(ticket));
        assert_eq!(controller.snapshot().fields.name, "A");
    }

    #[test]
    fn test_timer_kept_while_view_alive() {
        let mut slot = None;
        let cancelled = AtomicUsize::new(0);

        let kept = retain_timer(
            7,
            |h| {
                slot = Some(h);
                None
            },
            |_| {
                cancelled.fetch_add(1, Ordering::SeqCst);
            },
        );

        assert!(kept);
        assert_eq!(slot, Some(7));
        assert_eq!(cancelled.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_timer_cancelled_after_view_disposed() {
        let mut cancelled = Vec::new();

        // a disposed slot refuses the value and hands it back
        let kept = retain_timer(7, Some, |h| cancelled.push(h));

        assert!(!kept);
        assert_eq!(cancelled, [7]);
    }

    #[tokio::test]
    async fn test_explicit_dismiss() {
        let controller = ContactFormController::new(CountingSender::default());
        fill(&controller);
        controller.submit().await;

        controller.dismiss_success();
        assert_eq!(controller.state(), SubmissionState::Idle);
    }
}
