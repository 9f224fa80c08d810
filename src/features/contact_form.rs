//! Contact-form submission handling.
//!
//! Submission never leaves the page: the handler intercepts the event, runs
//! the pure checks from [`crate::validate`], and either fills the inline
//! error containers or shows the success box and resets the fields.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, UnwrapThrowExt};
use web_sys::{
    Event, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::context::PageContext;
use crate::validate::{self, FieldError};

const FORM_ID: &str = "contactForm";
const SUCCESS_BOX_ID: &str = "successBox";
const ERROR_SELECTOR: &str = ".error";

pub fn init(ctx: &PageContext) -> bool {
    let Some(form) = ctx.by_id::<HtmlFormElement>(FORM_ID) else {
        return false;
    };

    let on_submit = Closure::<dyn FnMut(Event)>::new({
        let ctx = ctx.clone();
        let form = form.clone();
        move |event: Event| {
            event.prevent_default();
            clear_errors(&ctx);

            let failures = validate::check_contact(
                &field_value(&ctx, "name"),
                &field_value(&ctx, "email"),
                &field_value(&ctx, "message"),
            );
            if failures.is_empty() {
                acknowledge(&ctx, &form);
            } else {
                for failure in failures {
                    show_error(&ctx, failure);
                }
            }
        }
    });
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
        .unwrap_throw();
    on_submit.forget();
    true
}

/// Current value of the input or textarea with the given id.
fn field_value(ctx: &PageContext, id: &str) -> String {
    let Some(element) = ctx.document().get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}

fn clear_errors(ctx: &PageContext) {
    for container in ctx.query_all(ERROR_SELECTOR) {
        if let Some(container) = container.dyn_ref::<HtmlElement>() {
            let _ = container.style().set_property("display", "none");
            container.set_text_content(None);
        }
    }
}

fn show_error(ctx: &PageContext, failure: FieldError) {
    let Some(container) = ctx.by_id::<HtmlElement>(failure.container_id()) else {
        return;
    };
    container.set_text_content(Some(failure.message()));
    let _ = container.style().set_property("display", "block");
}

fn acknowledge(ctx: &PageContext, form: &HtmlFormElement) {
    let success_box = ctx.by_id::<HtmlElement>(SUCCESS_BOX_ID);
    if let Some(success_box) = &success_box {
        let _ = success_box.style().set_property("display", "block");
    }
    form.reset();
    if let Some(success_box) = &success_box {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Nearest);
        success_box.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
