//! Pointer input channel
//!
//! Pointer-move events are queued by the sender (a DOM listener in the
//! browser) and drained by the app at the start of each tick, so input never
//! lands in the middle of a tick.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// A pointer-move event in page coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerMove {
    /// Pointer x in the viewport (`MouseEvent.clientX`)
    pub client_x: f32,
    /// Canvas left offset (`offsetLeft`) when the event fired
    pub offset_left: f32,
}

impl PointerMove {
    /// Pointer x relative to the canvas left edge
    pub fn relative_x(&self) -> f32 {
        self.client_x - self.offset_left
    }
}

#[derive(Debug, Default)]
struct Queue {
    events: VecDeque<PointerMove>,
    closed: bool,
}

/// Sending half; cloneable
#[derive(Debug, Clone)]
pub struct PointerSender {
    queue: Rc<RefCell<Queue>>,
}

/// Receiving half, owned by the app
#[derive(Debug)]
pub struct PointerReceiver {
    queue: Rc<RefCell<Queue>>,
}

/// Create a connected sender/receiver pair
pub fn channel() -> (PointerSender, PointerReceiver) {
    let queue = Rc::new(RefCell::new(Queue::default()));
    (
        PointerSender {
            queue: queue.clone(),
        },
        PointerReceiver { queue },
    )
}

impl PointerSender {
    /// Queue an event. Returns false once the channel is closed.
    pub fn send(&self, event: PointerMove) -> bool {
        let mut queue = self.queue.borrow_mut();
        if queue.closed {
            return false;
        }
        queue.events.push_back(event);
        true
    }

    /// Stop accepting events; already queued events can still be drained
    pub fn close(&self) {
        self.queue.borrow_mut().closed = true;
    }
}

impl PointerReceiver {
    /// Take all queued events, oldest first
    pub fn drain(&self) -> Vec<PointerMove> {
        self.queue.borrow_mut().events.drain(..).collect()
    }

    pub fn is_closed(&self) -> bool {
        self.queue.borrow().closed
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().events.len()
    }
}

/// Document-level `mousemove` listener feeding a [`PointerSender`] (WASM only).
///
/// The listener is removed on [`PointerSubscription::unsubscribe`] or drop.
#[cfg(target_arch = "wasm32")]
pub struct PointerSubscription {
    document: web_sys::Document,
    closure: Option<wasm_bindgen::closure::Closure<dyn FnMut(web_sys::MouseEvent)>>,
    sender: PointerSender,
}

#[cfg(target_arch = "wasm32")]
impl PointerSubscription {
    pub fn subscribe(
        document: &web_sys::Document,
        canvas: &web_sys::HtmlCanvasElement,
        sender: PointerSender,
    ) -> Result<Self, wasm_bindgen::JsValue> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let canvas = canvas.clone();
        let tx = sender.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::MouseEvent| {
            tx.send(PointerMove {
                client_x: event.client_x() as f32,
                offset_left: canvas.offset_left() as f32,
            });
        });
        document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;

        Ok(Self {
            document: document.clone(),
            closure: Some(closure),
            sender,
        })
    }

    /// Remove the listener and close the channel
    pub fn unsubscribe(&mut self) {
        use wasm_bindgen::JsCast;

        if let Some(closure) = self.closure.take() {
            if let Err(e) = self
                .document
                .remove_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())
            {
                log::warn!("removing mousemove listener failed: {:?}", e);
            }
            self.sender.close();
            log::info!("Pointer listener removed");
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for PointerSubscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}
