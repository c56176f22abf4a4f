use std::fmt;

/// Kind of client a session originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientClass {
    Desktop,
    Mobile,
    /// Neither marker matched; the session is not counted
    Unclassified,
}

impl fmt::Display for ClientClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClientClass::Desktop => "desktop",
            ClientClass::Mobile => "mobile",
            ClientClass::Unclassified => "unclassified",
        };
        write!(f, "{}", name)
    }
}
