use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// A stable handle to a node within a list's arena. Handles of removed nodes are never
    /// reused for a different node, so a stale handle can't alias a live one.
    pub(crate) struct NodeKey;
}

pub(crate) type Arena<T> = SlotMap<NodeKey, Node<T>>;

// Links are plain keys into the owning list's arena. The arena owns every node, so neither
// direction of the chain carries ownership and unlinking never frees anything by itself.
#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Option<NodeKey>,
    pub next: Option<NodeKey>,
}

impl<T> Node<T> {
    pub const fn detached(value: T) -> Node<T> {
        Node {
            value,
            prev: None,
            next: None,
        }
    }
}
