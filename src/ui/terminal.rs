//! Terminal surface: prints the activity cards and notices to a writer.

use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::interface::Surface;
use crate::model::structs::SignupForm;
use crate::notice::{Notice, NoticeState};
use crate::view::{ActivitiesView, ActivityCard, SelectOption, PARTICIPANTS_TITLE};

const RULE: &str = "=====================================";

pub struct TerminalSurface<W> {
    out: Mutex<W>,
    form: Mutex<SignupForm>,
    options: Mutex<Vec<SelectOption>>,
    notice: Arc<Mutex<NoticeState>>,
}

impl TerminalSurface<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            form: Mutex::new(SignupForm::default()),
            options: Mutex::new(ActivitiesView::placeholder_options()),
            notice: Arc::new(Mutex::new(NoticeState::default())),
        }
    }

    /// Fill the form as a user would before submitting.
    pub fn fill_form(&self, form: SignupForm) {
        *lock(&self.form) = form;
    }

    pub fn options(&self) -> Vec<SelectOption> {
        lock(&self.options).clone()
    }

    pub fn notice(&self) -> NoticeState {
        lock(&self.notice).clone()
    }

    pub fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self, text: &str) {
        let mut out = lock(&self.out);
        if let Err(e) = out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
            log::warn!("Failed to write to terminal: {e}");
        }
    }
}

pub fn format_card(card: &ActivityCard) -> String {
    let mut text = String::new();
    text.push_str(&format!("{}\n", card.title));
    text.push_str(&format!("{}\n", card.description));
    text.push_str(&format!("{}\n", card.schedule_line()));
    text.push_str(&format!("{}\n", card.spots_line()));
    text.push_str(&format!("{PARTICIPANTS_TITLE}\n"));
    for item in card.participants.items() {
        text.push_str(&format!("  - {item}\n"));
    }
    text
}

pub fn format_view(view: &ActivitiesView) -> String {
    let mut text = format!("{RULE}\n");
    for card in &view.cards {
        text.push_str(&format_card(card));
        text.push_str(&format!("{RULE}\n"));
    }
    text
}

/// Resolve what was typed at the activity prompt: an option number, or the
/// name itself. Number 0 is the placeholder and selects nothing.
pub fn pick_activity(options: &[SelectOption], choice: &str) -> String {
    let choice = choice.trim();
    match choice.parse::<usize>() {
        Ok(idx) => options
            .get(idx)
            .map(|option| option.value.clone())
            .unwrap_or_default(),
        Err(_) => choice.to_string(),
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn render_activities(&self, view: &ActivitiesView) {
        *lock(&self.options) = view.options.clone();
        self.write(&format_view(view));
    }

    fn render_load_error(&self, message: &str) {
        *lock(&self.options) = ActivitiesView::placeholder_options();
        self.write(&format!("{message}\n"));
    }

    fn show_notice(&self, notice: &Notice) {
        lock(&self.notice).show(notice);
        self.write(&format!("[{}] {}\n", notice.severity.as_str(), notice.text));
    }

    fn schedule_notice_hide(&self, after: Duration) {
        let notice = Arc::clone(&self.notice);
        tokio::spawn(async move {
            tokio::time::sleep(after).await;
            lock(&notice).hide();
            log::debug!("Notice hidden after {after:?}");
        });
    }

    fn read_form(&self) -> SignupForm {
        lock(&self.form).clone()
    }

    fn reset_form(&self) {
        *lock(&self.form) = SignupForm::default();
    }
}
