use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::{BaseComponent, Callback, ServerRenderer};

/// Render a component to markup without hydration comments
pub async fn render_markup<C, F>(create_props: F) -> String
where
    C: BaseComponent,
    F: FnOnce() -> C::Properties + Send + 'static,
{
    ServerRenderer::<C>::with_props(create_props)
        .hydratable(false)
        .render()
        .await
}

/// Mount a component into a fresh element attached to the document body
pub async fn mount<C: BaseComponent>(props: C::Properties) -> Element {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .expect("document");
    let root = document.create_element("div").expect("root element");
    document
        .body()
        .expect("body")
        .append_child(&root)
        .expect("attach root");

    yew::Renderer::<C>::with_root_and_props(root.clone(), props).render();
    settle().await;
    root
}

/// Let the scheduler flush pending renders
pub async fn settle() {
    yew::platform::time::sleep(Duration::ZERO).await;
}

pub fn query<T: JsCast>(root: &Element, selector: &str) -> T {
    root.query_selector(selector)
        .ok()
        .flatten()
        .unwrap_or_else(|| panic!("no element matches {}", selector))
        .dyn_into::<T>()
        .unwrap_or_else(|_| panic!("{} has an unexpected element type", selector))
}

/// Dispatch a bubbling event of type `kind` on `target`
pub fn fire(target: &Element, kind: &str) {
    let document = target.owner_document().expect("owner document");
    let event = document.create_event("Event").expect("create event");
    event.init_event_with_bubbles(kind, true);
    target.dispatch_event(&event).expect("dispatch event");
}

/// Callback that records every value it is emitted with
pub fn recorder<T: 'static>() -> (Callback<T>, Rc<RefCell<Vec<T>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let callback = {
        let seen = seen.clone();
        Callback::from(move |value: T| seen.borrow_mut().push(value))
    };
    (callback, seen)
}
