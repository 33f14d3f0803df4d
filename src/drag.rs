/// Squared pointer travel (4 px) at which a press becomes a window drag.
pub const DRAG_THRESHOLD_SQ: f64 = 16.0;

/// Index of the primary pointer button.
pub const PRIMARY_BUTTON: u16 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    Move,
    Up,
}

/// Window-level listener registration used while a press is being tracked.
pub trait PointerCapture {
    fn subscribe(&mut self, kind: PointerEventKind);
    fn unsubscribe(&mut self, kind: PointerEventKind);
}

/// Capture for hosts that forward every pointer event unconditionally.
#[derive(Debug, Default)]
pub struct NoopCapture;

impl PointerCapture for NoopCapture {
    fn subscribe(&mut self, _kind: PointerEventKind) {}
    fn unsubscribe(&mut self, _kind: PointerEventKind) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Input,
    Button,
    TextArea,
    Select,
    Link,
    Other,
}

impl ElementKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "input" => ElementKind::Input,
            "button" => ElementKind::Button,
            "textarea" => ElementKind::TextArea,
            "select" => ElementKind::Select,
            "a" => ElementKind::Link,
            _ => ElementKind::Other,
        }
    }

    /// Controls that keep their own click behavior and never start a drag.
    pub fn is_interactive(self) -> bool {
        !matches!(self, ElementKind::Other)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointerDown {
    pub button: u16,
    /// Click count reported by the host; 2 for the second press of a double click.
    pub detail: u32,
    pub x: f64,
    pub y: f64,
    /// Target element first, then its ancestors.
    pub path: Vec<ElementKind>,
}

impl PointerDown {
    pub fn primary(x: f64, y: f64) -> Self {
        Self {
            button: PRIMARY_BUTTON,
            detail: 1,
            x,
            y,
            path: Vec::new(),
        }
    }

    pub fn on(mut self, path: impl IntoIterator<Item = ElementKind>) -> Self {
        self.path = path.into_iter().collect();
        self
    }

    fn starts_drag(&self) -> bool {
        self.button == PRIMARY_BUTTON
            && self.detail <= 1
            && !self.path.iter().any(|el| el.is_interactive())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerMove {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub start_x: f64,
    pub start_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragStep {
    /// No press is being tracked.
    Idle,
    /// Still inside the threshold; could yet be a click.
    Pending,
    /// Threshold crossed. The caller starts the native drag and suppresses the
    /// move's default action. Tracking has already ended.
    Begin,
}

/// Tells a click on the window chrome apart from a drag of the window.
pub struct DragTracker {
    session: Option<DragSession>,
    capture: Box<dyn PointerCapture>,
}

impl DragTracker {
    pub fn new(capture: Box<dyn PointerCapture>) -> Self {
        Self {
            session: None,
            capture,
        }
    }

    pub fn session(&self) -> Option<DragSession> {
        self.session
    }

    pub fn is_tracking(&self) -> bool {
        self.session.is_some()
    }

    /// Returns `true` when tracking started and the press default should be suppressed.
    pub fn pointer_down(&mut self, ev: &PointerDown) -> bool {
        if !ev.starts_drag() {
            return false;
        }
        let already_subscribed = self.session.is_some();
        self.session = Some(DragSession {
            start_x: ev.x,
            start_y: ev.y,
        });
        if !already_subscribed {
            self.capture.subscribe(PointerEventKind::Move);
            self.capture.subscribe(PointerEventKind::Up);
        }
        tracing::trace!(x = ev.x, y = ev.y, "tracking chrome press");
        true
    }

    pub fn pointer_move(&mut self, ev: &PointerMove) -> DragStep {
        let Some(session) = self.session else {
            return DragStep::Idle;
        };
        let dx = ev.x - session.start_x;
        let dy = ev.y - session.start_y;
        if dx * dx + dy * dy < DRAG_THRESHOLD_SQ {
            return DragStep::Pending;
        }
        self.stop();
        DragStep::Begin
    }

    /// Ends tracking without a drag. Returns `true` if a press was being tracked.
    pub fn pointer_up(&mut self) -> bool {
        if self.session.is_none() {
            return false;
        }
        self.stop();
        true
    }

    fn stop(&mut self) {
        self.session = None;
        self.capture.unsubscribe(PointerEventKind::Move);
        self.capture.unsubscribe(PointerEventKind::Up);
    }
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::new(Box::new(NoopCapture))
    }
}
