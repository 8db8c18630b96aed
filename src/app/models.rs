/// level of a transient popup message
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    Info,
    Error,
}

pub type Popup = Option<(Notice, String)>;

/// a press on the on-screen keyboard
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyPress {
    Letter(char),
    Enter,
    Delete,
}
