/// Which style a toggle tag flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Strong,
    Emphasis,
}

/// Strong and emphasis toggle tags.
pub struct Emphasis;

impl Emphasis {
    /// Tags in the order they are tried at each position. Two-character tags
    /// come first so `**` is tried as strong before emphasis.
    pub const TAGS: [(&'static str, Marker); 4] = [
        ("**", Marker::Strong),
        ("__", Marker::Strong),
        ("*", Marker::Emphasis),
        ("_", Marker::Emphasis),
    ];
}
