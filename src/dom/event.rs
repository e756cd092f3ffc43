use super::ElementId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Change,
    Submit,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::Change => "change",
            EventKind::Submit => "submit",
        }
    }

    /// Only `submit` has a default action a handler may cancel here.
    pub fn cancelable(self) -> bool {
        matches!(self, EventKind::Submit)
    }
}

/// A user-generated event targeted at one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomEvent {
    pub kind: EventKind,
    pub target: ElementId,
    default_prevented: bool,
}

impl DomEvent {
    pub fn new(kind: EventKind, target: ElementId) -> Self {
        Self {
            kind,
            target,
            default_prevented: false,
        }
    }

    pub fn click(target: ElementId) -> Self {
        Self::new(EventKind::Click, target)
    }

    pub fn change(target: ElementId) -> Self {
        Self::new(EventKind::Change, target)
    }

    pub fn submit(target: ElementId) -> Self {
        Self::new(EventKind::Submit, target)
    }

    pub fn prevent_default(&mut self) {
        if self.kind.cancelable() {
            self.default_prevented = true;
        }
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
