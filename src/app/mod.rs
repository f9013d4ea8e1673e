//! Application module - the signup page controller
//!
//! [`SignupPage`] holds the logic shared by the browser and terminal front
//! ends: loading and rendering activities, handling a signup submission, and
//! showing notices. Network access goes through [`ActivitiesApi`] and all
//! drawing through [`Surface`], so neither the HTTP stack nor the widget
//! toolkit leaks in here.
//!
//! Every trigger is handled to completion by its own future. Nothing is
//! queued or de-duplicated; two overlapping submissions each run and finish
//! in whatever order their responses arrive.

use crate::config::ClientConfig;
use crate::interface::{ActivitiesApi, Surface};
use crate::model::dtos::SignupReply;
use crate::notice::Notice;
use crate::view::ActivitiesView;

pub const LOAD_ERROR: &str = "Error loading activities. Please try again later.";
pub const MISSING_FIELDS: &str = "Please fill out all fields.";
pub const SIGNUP_FALLBACK: &str = "Error signing up for activity.";
pub const CONNECTION_ERROR: &str = "Error connecting to the server. Please try again later.";

/// Events the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    PageLoaded,
    FormSubmitted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupOutcome {
    /// A required field was empty; nothing was sent.
    Incomplete,
    Accepted,
    Rejected,
    Unreachable,
}

pub struct SignupPage<C, S> {
    client: C,
    surface: S,
    config: ClientConfig,
}

impl<C: ActivitiesApi, S: Surface> SignupPage<C, S> {
    pub fn new(client: C, surface: S, config: ClientConfig) -> Self {
        Self {
            client,
            surface,
            config,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub async fn dispatch(&self, trigger: Trigger) {
        match trigger {
            Trigger::PageLoaded => {
                self.load_activities().await;
            }
            Trigger::FormSubmitted => {
                self.handle_signup().await;
            }
        }
    }

    /// Fetch the activities and redraw the list and the selection control.
    /// Returns whether the fetch succeeded; failures are drawn, never raised.
    pub async fn load_activities(&self) -> bool {
        match self.client.fetch_activities().await {
            Ok(activities) => {
                let view = ActivitiesView::build(&activities);
                self.surface.render_activities(&view);
                true
            }
            Err(e) => {
                log::error!("Error fetching activities: {e}");
                self.surface.render_load_error(LOAD_ERROR);
                false
            }
        }
    }

    /// Validate the current form and submit it.
    pub async fn handle_signup(&self) -> SignupOutcome {
        let form = self.surface.read_form();

        if !form.is_complete() {
            self.show_message(Notice::error(MISSING_FIELDS));
            return SignupOutcome::Incomplete;
        }

        match self.client.signup(&form.activity, &form.email).await {
            Ok(SignupReply::Accepted { message }) => {
                self.show_message(Notice::success(message));
                self.surface.reset_form();
                self.load_activities().await;
                SignupOutcome::Accepted
            }
            Ok(SignupReply::Rejected { status, detail }) => {
                log::debug!("Signup for {:?} rejected with status {status}", form.activity);
                let text = detail.unwrap_or_else(|| SIGNUP_FALLBACK.to_string());
                self.show_message(Notice::error(text));
                SignupOutcome::Rejected
            }
            Err(e) => {
                log::error!("Error signing up: {e}");
                self.show_message(Notice::error(CONNECTION_ERROR));
                SignupOutcome::Unreachable
            }
        }
    }

    pub fn show_message(&self, notice: Notice) {
        self.surface.show_notice(&notice);
        self.surface.schedule_notice_hide(self.config.notice_timeout);
    }
}
