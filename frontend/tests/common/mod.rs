//! Shared helpers for the browser tests.
//!
//! Every test mounts into its own container so queries never see DOM left
//! behind by an earlier test in the same page.

#![allow(dead_code)]

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement};

pub fn container() -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div.unchecked_into()
}

/// Let pending effects and spawned tasks run
pub async fn tick() {
    TimeoutFuture::new(0).await;
}

/// Several ticks, enough for a resource to resolve and its view to render
pub async fn settle() {
    for _ in 0..5 {
        TimeoutFuture::new(10).await;
    }
}

pub fn find(root: &HtmlElement, selector: &str) -> Option<Element> {
    root.query_selector(selector).unwrap()
}

pub fn count(root: &HtmlElement, selector: &str) -> u32 {
    root.query_selector_all(selector).unwrap().length()
}

pub fn click(root: &HtmlElement, selector: &str) {
    find(root, selector)
        .unwrap_or_else(|| panic!("no element matches {selector}"))
        .unchecked_into::<HtmlElement>()
        .click();
}

pub fn type_into(root: &HtmlElement, selector: &str, text: &str) {
    let input: HtmlInputElement = find(root, selector)
        .unwrap_or_else(|| panic!("no input matches {selector}"))
        .unchecked_into();
    input.set_value(text);
    let event = web_sys::Event::new("input").unwrap();
    input.dispatch_event(&event).unwrap();
}

pub fn input_value(root: &HtmlElement, selector: &str) -> String {
    find(root, selector)
        .unwrap()
        .unchecked_into::<HtmlInputElement>()
        .value()
}

pub fn text_of(root: &HtmlElement, selector: &str) -> Option<String> {
    find(root, selector).and_then(|el| el.text_content())
}

/// Click the `index`th element matching `selector`
pub fn click_nth(root: &HtmlElement, selector: &str, index: u32) {
    root.query_selector_all(selector)
        .unwrap()
        .item(index)
        .unwrap_or_else(|| panic!("no element {index} for {selector}"))
        .unchecked_into::<HtmlElement>()
        .click();
}

pub fn set_location(path_and_query: &str) {
    web_sys::window()
        .unwrap()
        .history()
        .unwrap()
        .replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path_and_query))
        .unwrap();
}
