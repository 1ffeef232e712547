use waypoint_ui_graphics::Point;
use web_time::Instant;

/// Engine-side identity of a pointer.
///
/// The mouse (and, by default, the primary touch contact) always resolves to
/// [`PointerId::Primary`]. Every other contact keeps the identifier the host
/// assigned to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerId {
    Primary,
    Native(i32),
}

impl PointerId {
    pub const PRIMARY: PointerId = PointerId::Primary;

    pub fn is_primary(&self) -> bool {
        matches!(self, PointerId::Primary)
    }
}

impl std::fmt::Display for PointerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PointerId::Primary => write!(f, "primary"),
            PointerId::Native(id) => write!(f, "pointer#{id}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

impl PointerEventKind {
    pub const ALL: [PointerEventKind; 4] = [
        PointerEventKind::Down,
        PointerEventKind::Move,
        PointerEventKind::Up,
        PointerEventKind::Cancel,
    ];

    pub(crate) fn index(self) -> usize {
        match self {
            PointerEventKind::Down => 0,
            PointerEventKind::Move => 1,
            PointerEventKind::Up => 2,
            PointerEventKind::Cancel => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PointerEventKind::Down => "down",
            PointerEventKind::Move => "move",
            PointerEventKind::Up => "up",
            PointerEventKind::Cancel => "cancel",
        }
    }
}

/// Kind of device that produced an event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerType {
    #[default]
    Mouse,
    Touch,
    Pen,
    Unknown,
}

/// Semantic button resolved from a native button code.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Left = 0,
    Right = 1,
    Middle = 2,
    Unknown = 3,
}

impl PointerButton {
    /// Maps the host's numeric button code. `0` is the main button, `1` the
    /// wheel button and `2` the secondary button; every other code, and a
    /// missing code, is `Unknown`.
    pub fn from_native(code: Option<i16>) -> Self {
        match code {
            Some(0) => PointerButton::Left,
            Some(1) => PointerButton::Middle,
            Some(2) => PointerButton::Right,
            _ => PointerButton::Unknown,
        }
    }
}

/// Set of held buttons. `Unknown` is never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerButtons(u8);

impl PointerButtons {
    pub const NONE: Self = Self(0);

    pub fn new() -> Self {
        Self::NONE
    }

    pub fn with(mut self, button: PointerButton) -> Self {
        self.insert(button);
        self
    }

    pub fn insert(&mut self, button: PointerButton) {
        if button != PointerButton::Unknown {
            self.0 |= 1 << (button as u8);
        }
    }

    pub fn remove(&mut self, button: PointerButton) {
        self.0 &= !(1 << (button as u8));
    }

    pub fn contains(&self, button: PointerButton) -> bool {
        (self.0 & (1 << (button as u8))) != 0
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = PointerButton> + '_ {
        [
            PointerButton::Left,
            PointerButton::Right,
            PointerButton::Middle,
        ]
        .into_iter()
        .filter(|button| self.contains(*button))
    }
}

impl Default for PointerButtons {
    fn default() -> Self {
        Self::NONE
    }
}

/// A normalized pointer event.
///
/// Built once per native event and handed to listeners by shared reference,
/// so it cannot change after dispatch starts.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    pub pointer_id: PointerId,
    pub pointer_type: PointerType,
    pub kind: PointerEventKind,
    pub button: PointerButton,
    pub page_pos: Point,
    pub timestamp: Instant,
    /// Strictly increasing across every event one normalizer produces.
    pub sequence: u64,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, page_pos: Point) -> Self {
        Self {
            pointer_id: PointerId::PRIMARY,
            pointer_type: PointerType::Mouse,
            kind,
            button: PointerButton::Unknown,
            page_pos,
            timestamp: Instant::now(),
            sequence: 0,
        }
    }

    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    pub fn with_pointer(mut self, pointer_id: PointerId, pointer_type: PointerType) -> Self {
        self.pointer_id = pointer_id;
        self.pointer_type = pointer_type;
        self
    }

    pub fn with_sequence(mut self, sequence: u64) -> Self {
        self.sequence = sequence;
        self
    }
}
