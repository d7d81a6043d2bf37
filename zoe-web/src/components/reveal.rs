//! One-shot entrance animation trigger

use leptos::html;
use leptos::prelude::*;
use shared::visibility::{Visibility, REVEAL_ROOT_MARGIN};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

struct RevealObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl RevealObserver {
    fn observe(element: &web_sys::Element, set_visible: WriteSignal<bool>) -> Result<Self, JsValue> {
        let mut state = Visibility::Hidden;
        let callback: ObserverCallback = Closure::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let intersecting = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .any(|entry| entry.is_intersecting());
                if intersecting && state.reveal() {
                    set_visible.set(true);
                    observer.disconnect();
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_root_margin(REVEAL_ROOT_MARGIN);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

/// Becomes `true` the first time `target` scrolls into view and stays `true`.
///
/// If the observer can't be created the section is shown immediately.
pub fn use_reveal(target: NodeRef<html::Section>) -> ReadSignal<bool> {
    let (visible, set_visible) = signal(false);
    let observer = StoredValue::new_local(None::<RevealObserver>);

    Effect::new(move |_| {
        let Some(element) = target.get() else {
            return;
        };
        if observer.with_value(|current| current.is_some()) {
            return;
        }
        match RevealObserver::observe(&element, set_visible) {
            Ok(created) => observer.set_value(Some(created)),
            Err(e) => {
                log::warn!("IntersectionObserver unavailable: {:?}", e);
                set_visible.set(true);
            }
        }
    });

    on_cleanup(move || {
        observer.try_update_value(|current| {
            if let Some(current) = current.take() {
                current.observer.disconnect();
            }
        });
    });

    visible
}
