//! Keyed listener registry.
//!
//! Binding under a key that is already taken drops the previous handle, so
//! re-running a binder never stacks handlers.

use std::collections::HashMap;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

#[derive(Debug)]
pub struct ListenerRegistry<H> {
    slots: HashMap<&'static str, H>,
}

impl<H> Default for ListenerRegistry<H> {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }
}

impl<H> ListenerRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `handle` under `key` and drops whatever was there before.
    pub fn bind(&mut self, key: &'static str, handle: H) {
        if self.slots.insert(key, handle).is_some() {
            log::debug!("Listener '{}' replaced", key);
        }
    }

    #[cfg(test)]
    pub fn unbind(&mut self, key: &'static str) -> bool {
        self.slots.remove(key).is_some()
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&H> {
        self.slots.get(key)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// A DOM listener that detaches itself when dropped.
pub struct DomListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl DomListener {
    pub fn attach(
        target: EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            target,
            event,
            callback,
        })
    }
}

impl Drop for DomListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}
