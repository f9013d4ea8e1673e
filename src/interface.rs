#![allow(async_fn_in_trait)]

use std::time::Duration;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::model::dtos::SignupReply;
use crate::model::structs::{ActivityMap, SignupForm};
use crate::notice::Notice;
use crate::view::ActivitiesView;

/// Common trait for HTTP client construction
pub trait HttpClient {
    /// Create a new HTTP client instance
    fn new(config: ClientConfig) -> Result<Self>
    where
        Self: Sized;
}

/// The two endpoints the signup page talks to
pub trait ActivitiesApi {
    /// `GET /activities`
    async fn fetch_activities(&self) -> Result<ActivityMap>;

    /// `POST /activities/{activity}/signup`. A non-2xx answer with a JSON body
    /// is an `Ok(SignupReply::Rejected)`; only transport and decoding
    /// failures are errors.
    async fn signup(&self, activity: &str, email: &str) -> Result<SignupReply>;
}

/// Where the page is drawn. Each front end owns its widgets and timers.
pub trait Surface {
    /// Replace the card list and the selection control.
    fn render_activities(&self, view: &ActivitiesView);

    /// Clear the selection control and put `message` in the list region.
    fn render_load_error(&self, message: &str);

    fn show_notice(&self, notice: &Notice);

    /// Hide the notice once `after` has elapsed. Hiding keeps the text.
    fn schedule_notice_hide(&self, after: Duration);

    fn read_form(&self) -> SignupForm;

    fn reset_form(&self);
}
