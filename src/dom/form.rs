//! Contact form binding: reads field values, renders errors and banners, and
//! owns the form's timer handles.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use super::{cast, document, listen, log_failure, require, require_in, set_style, set_styles};
use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::form::{
    BANNER_CLASS, BannerKind, ERROR_MESSAGE_CLASS, Field, FormController, FormEffect, FormEvent, FormTimer, FormValues,
};

const ERROR_FOR_ATTRIBUTE: &str = "data-error-for";

thread_local! {
    /// The initialized contact form, for calls that arrive from page scripts.
    static LIVE_FORM: RefCell<Weak<RefCell<FormBinding>>> = RefCell::new(Weak::new());
}

struct FormBinding {
    controller: FormController,
    document: Document,
    form: HtmlFormElement,
    fields: HashMap<Field, Element>,
    submit: HtmlButtonElement,
    original_label: Option<String>,
    banner: Option<Element>,
    timers: HashMap<FormTimer, Timeout>,
    this: Weak<RefCell<FormBinding>>,
}

pub(super) fn init(config: &SiteConfig) -> Result<(), SiteError> {
    let document = document()?;
    let form_element = require(&document, &config.selectors.contact_form)?;

    let mut fields = HashMap::new();
    for field in Field::ALL {
        fields.insert(field, require_in(&form_element, field.selector())?);
    }
    let submit = cast::<HtmlButtonElement>(require_in(&form_element, r#"button[type="submit"]"#)?, "submit button")?;
    let form = cast::<HtmlFormElement>(form_element, "contact form")?;

    let binding = Rc::new_cyclic(|this| {
        RefCell::new(FormBinding {
            controller: FormController::new(config.form.clone()),
            document,
            form: form.clone(),
            fields: fields.clone(),
            submit,
            original_label: None,
            banner: None,
            timers: HashMap::new(),
            this: this.clone(),
        })
    });

    LIVE_FORM.with(|live| *live.borrow_mut() = Rc::downgrade(&binding));

    {
        let binding = Rc::clone(&binding);
        listen::<Event>(&form, "submit", move |event| {
            event.prevent_default();
            let Ok(mut binding) = binding.try_borrow_mut() else {
                return;
            };
            let values = binding.read_values();
            binding.dispatch(FormEvent::Submit(values));
        })?;
    }

    for (field, control) in fields {
        let binding = Rc::clone(&binding);
        let source = control.clone();
        listen::<Event>(&control, "blur", move |_| {
            let Ok(mut binding) = binding.try_borrow_mut() else {
                return;
            };
            let value = control_value(&source);
            binding.dispatch(FormEvent::Blur { field, value });
        })?;
    }
    Ok(())
}

/// Show a status banner on the initialized contact form. The banner expires
/// like the one shown after a submission.
pub(super) fn show_message(kind: BannerKind, message: &str) -> Result<(), SiteError> {
    let binding = LIVE_FORM
        .with(|live| live.borrow().upgrade())
        .ok_or_else(|| SiteError::MissingElement("initialized contact form".to_owned()))?;
    let mut binding = binding
        .try_borrow_mut()
        .map_err(|_| SiteError::Dom("contact form is mid-update".to_owned()))?;
    let effects = binding.controller.show_banner(kind, message);
    binding.apply_all(effects);
    Ok(())
}

impl FormBinding {
    fn read_values(&self) -> FormValues {
        let value = |field| self.fields.get(&field).map(control_value).unwrap_or_default();
        FormValues { name: value(Field::Name), email: value(Field::Email), message: value(Field::Message) }
    }

    fn dispatch(&mut self, event: FormEvent) {
        let effects = self.controller.handle(event);
        self.apply_all(effects);
    }

    fn apply_all(&mut self, effects: Vec<FormEffect>) {
        for effect in effects {
            log_failure("form", self.apply(effect));
        }
    }

    fn apply(&mut self, effect: FormEffect) -> Result<(), SiteError> {
        match effect {
            FormEffect::ShowError { field, message } => self.show_error(field, &message),
            FormEffect::ClearError(field) => self.clear_error(field),
            FormEffect::DisableSubmit { label } => {
                self.original_label = self.submit.text_content();
                self.submit.set_disabled(true);
                self.submit.set_text_content(Some(&label));
                set_style(&self.submit, "opacity", "0.7")
            }
            FormEffect::EnableSubmit => {
                self.submit.set_disabled(false);
                if let Some(label) = self.original_label.take() {
                    self.submit.set_text_content(Some(&label));
                }
                set_style(&self.submit, "opacity", "1")
            }
            FormEffect::ShowBanner { kind, message } => self.show_banner(kind, &message),
            FormEffect::RemoveBanner => {
                if let Some(banner) = self.banner.take() {
                    if banner.parent_node().is_some() {
                        banner.remove();
                    }
                }
                Ok(())
            }
            FormEffect::ResetFields => {
                self.form.reset();
                Ok(())
            }
            FormEffect::Schedule { timer, delay_ms } => {
                let this = self.this.clone();
                let handle = Timeout::new(delay_ms, move || fire(&this, timer));
                // Replacing an entry drops, and so cancels, the previous handle.
                self.timers.insert(timer, handle);
                Ok(())
            }
            FormEffect::Cancel(timer) => {
                self.timers.remove(&timer);
                Ok(())
            }
        }
    }

    fn field(&self, field: Field) -> Result<&Element, SiteError> {
        self.fields.get(&field).ok_or_else(|| SiteError::MissingElement(field.selector().to_owned()))
    }

    fn show_error(&self, field: Field, message: &str) -> Result<(), SiteError> {
        self.clear_error(field)?;
        let control = self.field(field)?;
        let parent = control
            .parent_node()
            .ok_or_else(|| SiteError::MissingElement(format!("parent of {}", field.selector())))?;

        let node = cast::<HtmlElement>(self.document.create_element("div")?, "error message")?;
        node.set_class_name(ERROR_MESSAGE_CLASS);
        node.set_attribute(ERROR_FOR_ATTRIBUTE, field.input_name())?;
        node.set_text_content(Some(message));
        set_styles(
            &node,
            &[("color", "var(--color-error)"), ("font-size", "0.875rem"), ("margin-top", "0.25rem")],
        )?;
        parent.append_child(&node)?;

        if let Some(control) = control.dyn_ref::<HtmlElement>() {
            set_style(control, "border-color", "var(--color-error)")?;
        }
        Ok(())
    }

    fn clear_error(&self, field: Field) -> Result<(), SiteError> {
        let control = self.field(field)?;
        if let Some(parent) = control.parent_element() {
            let selector = format!(r#".{ERROR_MESSAGE_CLASS}[{ERROR_FOR_ATTRIBUTE}="{}"]"#, field.input_name());
            if let Some(existing) = parent.query_selector(&selector)? {
                existing.remove();
            }
        }
        if let Some(control) = control.dyn_ref::<HtmlElement>() {
            set_style(control, "border-color", "")?;
        }
        Ok(())
    }

    fn show_banner(&mut self, kind: BannerKind, message: &str) -> Result<(), SiteError> {
        if let Some(existing) = self.form.query_selector(&format!(".{BANNER_CLASS}"))? {
            existing.remove();
        }

        let banner = cast::<HtmlElement>(self.document.create_element("div")?, "form banner")?;
        banner.set_class_name(&format!("{BANNER_CLASS} {}", kind.class_name()));
        banner.set_text_content(Some(message));
        set_styles(
            &banner,
            &[
                ("padding", "1rem"),
                ("margin-top", "1rem"),
                ("border-radius", "0.5rem"),
                ("text-align", "center"),
                ("font-weight", "600"),
            ],
        )?;
        let palette: [(&str, &str); 3] = match kind {
            BannerKind::Success => [
                ("background-color", "rgba(16, 185, 129, 0.1)"),
                ("color", "var(--color-success)"),
                ("border", "1px solid var(--color-success)"),
            ],
            BannerKind::Error => [
                ("background-color", "rgba(239, 68, 68, 0.1)"),
                ("color", "var(--color-error)"),
                ("border", "1px solid var(--color-error)"),
            ],
        };
        set_styles(&banner, &palette)?;

        self.form.append_child(&banner)?;
        self.banner = Some(banner.into());
        Ok(())
    }
}

/// Timer callback. The fired handle stays in `timers` until it is replaced or
/// cancelled; dropping it here would free the closure that is running.
fn fire(this: &Weak<RefCell<FormBinding>>, timer: FormTimer) {
    let Some(binding) = this.upgrade() else {
        return;
    };
    let Ok(mut binding) = binding.try_borrow_mut() else {
        log::warn!("form: {timer:?} fired during another form update");
        return;
    };
    binding.dispatch(FormEvent::TimerFired(timer));
}

fn control_value(control: &Element) -> String {
    if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = control.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        control.text_content().unwrap_or_default()
    }
}
