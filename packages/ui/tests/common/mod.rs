#![allow(dead_code)]

use std::any::Any;
use std::rc::Rc;

use board_core::Job;
use dioxus::prelude::*;
use dioxus_core::{ElementId, Event};
use dioxus_html::{
    PlatformEventData, SerializedFormData, SerializedHtmlEventConverter, SerializedMouseData,
    set_event_converter,
};

/// Upper bound on element ids probed when dispatching to every element.
pub const MAX_ELEMENT_ID: usize = 64;

/// Mount a component in a fresh `VirtualDom` and serialize it to HTML.
pub fn render<P: Clone + 'static>(root: fn(P) -> Element, props: P) -> String {
    let dom = mount(root, props);
    dioxus_ssr::render(&dom)
}

/// Serialize a prop-less root component to HTML.
pub fn render_root(root: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(root);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Mount a component and build its first render, ready for events.
pub fn mount<P: Clone + 'static>(root: fn(P) -> Element, props: P) -> VirtualDom {
    set_event_converter(Box::new(SerializedHtmlEventConverter));
    let mut dom = VirtualDom::new_with_props(root, props);
    dom.rebuild_in_place();
    dom
}

pub fn click(dom: &VirtualDom, element: usize) {
    let data = PlatformEventData::new(Box::<SerializedMouseData>::default());
    dispatch(dom, "click", Rc::new(data), element);
}

/// Fire an `input` or `change` event carrying `value`.
pub fn form_event(dom: &VirtualDom, name: &str, value: &str, element: usize) {
    let data = PlatformEventData::new(Box::new(SerializedFormData::new(
        value.to_string(),
        Default::default(),
    )));
    dispatch(dom, name, Rc::new(data), element);
}

fn dispatch(dom: &VirtualDom, name: &str, data: Rc<dyn Any>, element: usize) {
    dom.runtime()
        .handle_event(name, Event::new(data, true), ElementId(element));
}

/// Extract every `attr="..."` value from rendered HTML.
pub fn attribute_values(html: &str, attr: &str) -> Vec<String> {
    let needle = format!(" {attr}=\"");
    html.match_indices(&needle)
        .filter_map(|(at, _)| {
            let rest = &html[at + needle.len()..];
            rest.find('"').map(|end| rest[..end].to_string())
        })
        .collect()
}

pub fn sample_job() -> Job {
    Job::new(
        "Frontend Engineer",
        "Andela",
        "Nairobi, Kenya",
        "Full-time",
        "Mid-Level",
        "3 days ago",
    )
    .with_id("job-1")
}
