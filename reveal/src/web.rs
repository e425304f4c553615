//! Browser binding: `IntersectionObserver` feeding a [`RevealScene`].
//!
//! `start` runs when the WASM module loads. It registers every element that
//! carries a `data-reveal` attribute, observes them with one
//! `IntersectionObserver`, and toggles the `in-view` class as the scene emits
//! transitions. Debounced changes are applied by a fixed-rate poll. The binding
//! lives in a thread-local; `unmount` drops it, which disconnects the observer,
//! stops the poll and unsubscribes.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::{
    IN_VIEW_CLASS, REVEAL_ATTRIBUTE, REVEAL_INDEX_ATTRIBUTE, ROOT_ACTIVE_CLASS, RevealOptions, RevealScene,
    Subscription, Transition,
};

const POLL_INTERVAL_MS: u32 = 40;

type EntryCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

thread_local! {
    static MOUNTED: RefCell<Option<RevealBinding>> = const { RefCell::new(None) };
}

struct RevealBinding {
    observer: IntersectionObserver,
    _callback: EntryCallback,
    _subscription: Subscription,
    _poll: Interval,
}

impl Drop for RevealBinding {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&err.to_string()));
    }
    match mount() {
        Ok(binding) => MOUNTED.with(|slot| *slot.borrow_mut() = Some(binding)),
        Err(err) => log::warn!("reveal binding not mounted: {err:?}"),
    }
}

/// Tear the binding down. Elements keep their current classes.
#[wasm_bindgen]
pub fn unmount() {
    MOUNTED.with(|slot| slot.borrow_mut().take());
}

fn mount() -> Result<RevealBinding, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let nodes = document.query_selector_all(&format!("[{REVEAL_ATTRIBUTE}]"))?;
    let mut scene = RevealScene::new();
    let mut elements = Vec::new();
    let mut thresholds = vec![0.0_f64];

    for i in 0..nodes.length() {
        let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let raw = element.get_attribute(REVEAL_ATTRIBUTE).unwrap_or_default();
        let options = match RevealOptions::decode(&raw) {
            Ok(options) => options,
            Err(err) => {
                log::warn!("ignoring {REVEAL_ATTRIBUTE}={raw:?}: {err}");
                RevealOptions::default()
            }
        };
        let target = scene.register(&options);
        element.set_attribute(REVEAL_INDEX_ATTRIBUTE, &target.to_string())?;
        if !thresholds.iter().any(|t| (t - options.threshold).abs() < f64::EPSILON) {
            thresholds.push(options.threshold);
        }
        elements.push(element);
    }

    let elements = Rc::new(elements);
    let subscription = {
        let elements = Rc::clone(&elements);
        scene.subscribe(move |event| {
            let Some(element) = elements.get(event.target) else {
                return;
            };
            let force = event.transition == Transition::Enter;
            if let Err(err) = element.class_list().toggle_with_force(IN_VIEW_CLASS, force) {
                log::warn!("class toggle failed: {err:?}");
            }
        })
    };

    let scene = Rc::new(RefCell::new(scene));

    let callback: EntryCallback = {
        let scene = Rc::clone(&scene);
        Closure::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
            let now = js_sys::Date::now();
            let mut scene = scene.borrow_mut();
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let Some(target) = entry
                    .target()
                    .get_attribute(REVEAL_INDEX_ATTRIBUTE)
                    .and_then(|raw| raw.parse::<usize>().ok())
                else {
                    continue;
                };
                scene.observe(target, entry.is_intersecting(), entry.intersection_ratio(), now);
            }
            scene.poll(now);
        })
    };

    let init = IntersectionObserverInit::new();
    let js_thresholds = thresholds.iter().copied().map(JsValue::from_f64).collect::<js_sys::Array>();
    init.set_threshold(&js_thresholds);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    for element in elements.iter() {
        observer.observe(element);
    }

    let poll = {
        let scene = Rc::clone(&scene);
        Interval::new(POLL_INTERVAL_MS, move || {
            let mut scene = scene.borrow_mut();
            if scene.next_due_ms().is_some() {
                scene.poll(js_sys::Date::now());
            }
        })
    };

    if let Some(root) = document.document_element() {
        root.class_list().add_1(ROOT_ACTIVE_CLASS)?;
    }
    log::info!("reveal binding mounted for {} elements", elements.len());

    Ok(RevealBinding { observer, _callback: callback, _subscription: subscription, _poll: poll })
}
