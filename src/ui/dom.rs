//! Browser surface built on `web_sys`, plus the page entry point.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, Element, Event, HtmlFormElement, HtmlInputElement, HtmlOptionElement,
    HtmlSelectElement,
};

use crate::app::{SignupPage, Trigger};
use crate::client::gloo::WasmClient;
use crate::config::ClientConfig;
use crate::error::{ErrorKind, Result};
use crate::interface::{ActivitiesApi, HttpClient, Surface};
use crate::model::structs::SignupForm;
use crate::notice::{Notice, NoticeState, HIDDEN_CLASS};
use crate::view::{
    ActivitiesView, ActivityCard, SelectOption, PARTICIPANTS_TITLE, SCHEDULE_LABEL, SPOTS_LABEL,
};

pub const ACTIVITIES_LIST_ID: &str = "activities-list";
pub const ACTIVITY_SELECT_ID: &str = "activity";
pub const SIGNUP_FORM_ID: &str = "signup-form";
pub const EMAIL_INPUT_ID: &str = "email";
pub const MESSAGE_ID: &str = "message";

type JsResult<T> = core::result::Result<T, JsValue>;

pub struct DomSurface {
    document: Document,
    activities_list: Element,
    activity_select: HtmlSelectElement,
    form: HtmlFormElement,
    email: HtmlInputElement,
    message: Element,
    notice: Rc<RefCell<NoticeState>>,
}

fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or_else(|| ErrorKind::DomError(format!("missing or mistyped element #{id}")).into())
}

impl DomSurface {
    pub fn from_document(document: Document) -> Result<Self> {
        Ok(Self {
            activities_list: element_by_id(&document, ACTIVITIES_LIST_ID)?,
            activity_select: element_by_id(&document, ACTIVITY_SELECT_ID)?,
            form: element_by_id(&document, SIGNUP_FORM_ID)?,
            email: element_by_id(&document, EMAIL_INPUT_ID)?,
            message: element_by_id(&document, MESSAGE_ID)?,
            notice: Rc::new(RefCell::new(NoticeState::default())),
            document,
        })
    }

    pub fn form(&self) -> &HtmlFormElement {
        &self.form
    }

    fn text_element(&self, tag: &str, text: &str) -> JsResult<Element> {
        let el = self.document.create_element(tag)?;
        el.set_text_content(Some(text));
        Ok(el)
    }

    /// `<p><strong>{label}</strong> {value}</p>`
    fn labelled_line(&self, label: &str, value: &str) -> JsResult<Element> {
        let p = self.document.create_element("p")?;
        let strong = self.text_element("strong", label)?;
        p.append_child(&strong)?;
        p.append_child(&self.document.create_text_node(&format!(" {value}")))?;
        Ok(p)
    }

    fn build_card(&self, card: &ActivityCard) -> JsResult<Element> {
        let root = self.document.create_element("div")?;
        root.set_class_name("activity-card");

        let title = self.text_element("h4", &card.title)?;
        let description = self.text_element("p", &card.description)?;
        let schedule = self.labelled_line(SCHEDULE_LABEL, &card.schedule)?;
        let spots = self.labelled_line(SPOTS_LABEL, &card.spots_text())?;
        for line in [&title, &description, &schedule, &spots] {
            root.append_child(line)?;
        }

        let section = self.document.create_element("div")?;
        section.set_class_name("participants-section");

        let heading = self.document.create_element("p")?;
        let strong = self.text_element("strong", PARTICIPANTS_TITLE)?;
        heading.append_child(&strong)?;
        section.append_child(&heading)?;

        let list = self.document.create_element("ul")?;
        for item in card.participants.items() {
            let li = self.text_element("li", item)?;
            list.append_child(&li)?;
        }
        section.append_child(&list)?;
        root.append_child(&section)?;

        Ok(root)
    }

    fn fill_select(&self, options: &[SelectOption]) -> JsResult<()> {
        self.activity_select.set_inner_html("");
        for option in options {
            let el: HtmlOptionElement = self.document.create_element("option")?.dyn_into()?;
            el.set_value(&option.value);
            el.set_text_content(Some(&option.label));
            self.activity_select.append_child(&el)?;
        }
        Ok(())
    }

    fn try_render(&self, view: &ActivitiesView) -> JsResult<()> {
        self.activities_list.set_inner_html("");
        self.fill_select(&view.options)?;
        for card in &view.cards {
            let el = self.build_card(card)?;
            self.activities_list.append_child(&el)?;
        }
        Ok(())
    }

    fn try_render_error(&self, message: &str) -> JsResult<()> {
        self.activities_list.set_inner_html("");
        self.fill_select(&ActivitiesView::placeholder_options())?;
        let p = self.text_element("p", message)?;
        p.set_class_name("error");
        self.activities_list.append_child(&p)?;
        Ok(())
    }

    fn paint_notice(message: &Element, state: &NoticeState) {
        message.set_text_content(Some(state.text()));
        message.set_class_name(state.class_name());
    }

    fn hide_notice(message: &Element, notice: &RefCell<NoticeState>) {
        notice.borrow_mut().hide();
        message.set_class_name(HIDDEN_CLASS);
    }
}

impl Surface for DomSurface {
    fn render_activities(&self, view: &ActivitiesView) {
        if let Err(e) = self.try_render(view) {
            log::error!("Failed to render activities: {e:?}");
        }
    }

    fn render_load_error(&self, message: &str) {
        if let Err(e) = self.try_render_error(message) {
            log::error!("Failed to render load error: {e:?}");
        }
    }

    fn show_notice(&self, notice: &Notice) {
        let mut state = self.notice.borrow_mut();
        state.show(notice);
        Self::paint_notice(&self.message, &state);
    }

    fn schedule_notice_hide(&self, after: Duration) {
        let message = self.message.clone();
        let notice = Rc::clone(&self.notice);
        let millis = u32::try_from(after.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, move || Self::hide_notice(&message, &notice)).forget();
    }

    fn read_form(&self) -> SignupForm {
        SignupForm::new(self.email.value(), self.activity_select.value())
    }

    fn reset_form(&self) {
        self.form.reset();
    }
}

/// Run a signup for every submission of `form`, keeping the browser on the page.
fn listen_for_submit<C>(page: Rc<SignupPage<C, DomSurface>>, form: &HtmlFormElement) -> JsResult<()>
where
    C: ActivitiesApi + 'static,
{
    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        let page = Rc::clone(&page);
        spawn_local(async move { page.dispatch(Trigger::FormSubmitted).await });
    });
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();
    Ok(())
}

/// Wire the page: load activities once and handle every form submission.
pub fn mount(config: ClientConfig) -> JsResult<()> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let surface =
        DomSurface::from_document(document).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let form = surface.form().clone();
    let client =
        WasmClient::new(config.clone()).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let page = Rc::new(SignupPage::new(client, surface, config));

    {
        let page = Rc::clone(&page);
        spawn_local(async move { page.dispatch(Trigger::PageLoaded).await });
    }

    listen_for_submit(page, &form)
}
