use futures::future::LocalBoxFuture;
use std::rc::Rc;

use crate::drag::{DragStep, DragTracker, PointerCapture, PointerDown, PointerMove};
use crate::messages::{self, EnglishCatalog, Translate};
use crate::toast::ToastSink;

pub type NativeWindowFuture<'a> = LocalBoxFuture<'a, anyhow::Result<()>>;

/// Window primitives provided by the hosting runtime.
pub trait NativeWindow {
    fn minimize(&self) -> NativeWindowFuture<'_>;
    fn toggle_maximize(&self) -> NativeWindowFuture<'_>;
    fn close(&self) -> NativeWindowFuture<'_>;
    fn start_dragging(&self) -> NativeWindowFuture<'_>;
    fn set_always_on_top(&self, on_top: bool) -> NativeWindowFuture<'_>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowOp {
    Minimize,
    ToggleMaximize,
    Close,
    StartDragging,
    SetAlwaysOnTop,
}

impl WindowOp {
    /// Message key shown when the operation fails.
    pub fn failure_key(self) -> &'static str {
        match self {
            WindowOp::Minimize => messages::MINIMIZE_FAILED,
            WindowOp::ToggleMaximize => messages::MAXIMIZE_FAILED,
            WindowOp::Close => messages::CLOSE_FAILED,
            WindowOp::StartDragging => messages::DRAG_FAILED,
            WindowOp::SetAlwaysOnTop => messages::ALWAYS_ON_TOP_FAILED,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WindowOp::Minimize => "minimize",
            WindowOp::ToggleMaximize => "toggle_maximize",
            WindowOp::Close => "close",
            WindowOp::StartDragging => "start_dragging",
            WindowOp::SetAlwaysOnTop => "set_always_on_top",
        }
    }
}

/// Custom title-bar behavior for a borderless window.
///
/// Without a native window (e.g. the UI is served as a plain page) every
/// operation returns immediately. Native failures become toasts and are never
/// returned to the caller.
pub struct WindowControls {
    native: Option<Rc<dyn NativeWindow>>,
    toasts: Rc<dyn ToastSink>,
    messages: Rc<dyn Translate>,
    drag: DragTracker,
}

impl WindowControls {
    pub fn new(native: Option<Rc<dyn NativeWindow>>, toasts: Rc<dyn ToastSink>) -> Self {
        Self {
            native,
            toasts,
            messages: Rc::new(EnglishCatalog),
            drag: DragTracker::default(),
        }
    }

    pub fn with_messages(mut self, messages: Rc<dyn Translate>) -> Self {
        self.messages = messages;
        self
    }

    pub fn with_capture(mut self, capture: Box<dyn PointerCapture>) -> Self {
        self.drag = DragTracker::new(capture);
        self
    }

    pub fn is_native(&self) -> bool {
        self.native.is_some()
    }

    pub fn drag_tracker(&self) -> &DragTracker {
        &self.drag
    }

    pub async fn minimize(&self) {
        if let Some(native) = &self.native {
            let result = native.minimize().await;
            self.report(WindowOp::Minimize, result);
        }
    }

    pub async fn toggle_maximize(&self) {
        if let Some(native) = &self.native {
            let result = native.toggle_maximize().await;
            self.report(WindowOp::ToggleMaximize, result);
        }
    }

    pub async fn close(&self) {
        if let Some(native) = &self.native {
            let result = native.close().await;
            self.report(WindowOp::Close, result);
        }
    }

    pub async fn set_always_on_top(&self, on_top: bool) {
        if let Some(native) = &self.native {
            let result = native.set_always_on_top(on_top).await;
            self.report(WindowOp::SetAlwaysOnTop, result);
        }
    }

    pub async fn start_dragging(&self) {
        if let Some(native) = &self.native {
            let result = native.start_dragging().await;
            self.report(WindowOp::StartDragging, result);
        }
    }

    /// Press on the chrome. Returns `true` when the host should suppress the default action.
    pub fn pointer_down(&mut self, ev: &PointerDown) -> bool {
        if self.native.is_none() {
            return false;
        }
        self.drag.pointer_down(ev)
    }

    /// Starts the native drag once the press has travelled far enough.
    pub async fn pointer_move(&mut self, ev: &PointerMove) -> DragStep {
        if self.native.is_none() {
            return DragStep::Idle;
        }
        let step = self.drag.pointer_move(ev);
        if step == DragStep::Begin {
            self.start_dragging().await;
        }
        step
    }

    pub fn pointer_up(&mut self) {
        if self.drag.pointer_up() {
            tracing::trace!("chrome press released without drag");
        }
    }

    fn report(&self, op: WindowOp, result: anyhow::Result<()>) {
        if let Err(e) = result {
            let error = format!("{e:#}");
            tracing::warn!(op = op.as_str(), error = %error, "native window operation failed");
            let message = self.messages.t(op.failure_key(), &[("error", error.as_str())]);
            self.toasts.show_toast(&message);
        }
    }
}
