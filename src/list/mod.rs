use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

mod iter;

pub use iter::Iter;

/// Failure values of the removal operations on an `ItemList`.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ListError {
    #[error("Item cannot be removed from an empty list.")]
    EmptyList,
    #[error("Item '{0}' was not found in list and could not be removed.")]
    NotFound(String),
}

type Link = Option<Box<ItemNode>>;

/// A single entry of the chain. Each node exclusively owns its successor.
struct ItemNode {
    name: String,
    next: Link,
}

/// Replaces the node held by `link` with its successor and returns the detached node's name.
///
/// Returns `None` if `link` is empty.
fn unlink(link: &mut Link) -> Option<String> {
    let ItemNode { name, next } = *link.take()?;
    *link = next;
    Some(name)
}

/// Insert-ordered list of item names, stored as a singly linked chain of owned nodes.
///
/// The list owns the head node, and every node owns its successor, so the chain is always
/// acyclic and each node is reachable only from its predecessor.
#[derive(Default, Deserialize)]
#[serde(from = "Vec<String>")]
pub struct ItemList {
    first: Link,
    len: usize,
}

impl ItemList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes currently in the chain
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /// Returns the name stored in the head node, if any
    #[must_use]
    pub fn front(&self) -> Option<&str> {
        self.first.as_deref().map(|node| node.name.as_str())
    }

    /// Inserts `name` as the new head of the list.
    pub fn insert_front(&mut self, name: impl Into<String>) {
        let next = self.first.take();
        self.first = Some(Box::new(ItemNode {
            name: name.into(),
            next,
        }));
        self.len += 1;
    }

    /// Appends `name` after the current last node.
    ///
    /// Walks the whole chain to find the tail, so this is linear in the list's length.
    pub fn insert_back(&mut self, name: impl Into<String>) {
        if self.first.is_none() {
            self.insert_front(name);
            return;
        }
        let mut cursor = &mut self.first;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(ItemNode {
            name: name.into(),
            next: None,
        }));
        self.len += 1;
    }

    /// Removes the head node and returns its name.
    pub fn remove_front(&mut self) -> Result<String, ListError> {
        let name = unlink(&mut self.first).ok_or(ListError::EmptyList)?;
        self.len -= 1;
        Ok(name)
    }

    /// Removes the last node and returns its name.
    ///
    /// A single-node list ends up empty, exactly as with `remove_front`.
    pub fn remove_back(&mut self) -> Result<String, ListError> {
        // Advance to the link which holds the tail node.
        let mut cursor = &mut self.first;
        while cursor.as_ref().is_some_and(|node| node.next.is_some()) {
            if let Some(node) = cursor {
                cursor = &mut node.next;
            }
        }
        let name = unlink(cursor).ok_or(ListError::EmptyList)?;
        self.len -= 1;
        Ok(name)
    }

    /// Removes the first node whose name is exactly `name` and returns the removed name.
    ///
    /// Comparison is case-sensitive, and later duplicates are left untouched.
    pub fn remove_by_name(&mut self, name: &str) -> Result<String, ListError> {
        let Some(head) = self.first.as_deref() else {
            return Err(ListError::EmptyList);
        };
        if head.name == name {
            return self.remove_front();
        }

        // Advance to the link which holds the first match, or to the empty link after the tail.
        let mut cursor = &mut self.first;
        while cursor.as_ref().is_some_and(|node| node.name != name) {
            if let Some(node) = cursor {
                cursor = &mut node.next;
            }
        }
        let removed = unlink(cursor).ok_or_else(|| ListError::NotFound(name.to_string()))?;
        self.len -= 1;
        Ok(removed)
    }

    /// Returns an iterator over the stored names in list order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.first.as_deref(), self.len)
    }

    /// Copies the stored names into a `Vec` in list order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.iter().map(ToString::to_string).collect()
    }
}

impl Drop for ItemList {
    fn drop(&mut self) {
        // Release nodes front to back without recursing through `Box<ItemNode>::drop`.
        let mut link = self.first.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl Clone for ItemList {
    fn clone(&self) -> Self {
        self.iter().collect()
    }
}

impl PartialEq for ItemList {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for ItemList {}

impl std::fmt::Debug for ItemList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Serialize for ItemList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<S: Into<String>> Extend<S> for ItemList {
    /// Appends all names in iteration order.
    ///
    /// The tail is located once, rather than once per name as repeated `insert_back` calls would.
    fn extend<I: IntoIterator<Item = S>>(&mut self, names: I) {
        let mut cursor = &mut self.first;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        for name in names {
            let node = cursor.insert(Box::new(ItemNode {
                name: name.into(),
                next: None,
            }));
            cursor = &mut node.next;
            self.len += 1;
        }
    }
}

impl<S: Into<String>> FromIterator<S> for ItemList {
    fn from_iter<I: IntoIterator<Item = S>>(names: I) -> Self {
        let mut list = Self::new();
        list.extend(names);
        list
    }
}

impl From<Vec<String>> for ItemList {
    #[inline]
    fn from(items: Vec<String>) -> Self {
        items.into_iter().collect()
    }
}

impl From<ItemList> for Vec<String> {
    #[inline]
    fn from(mut l: ItemList) -> Self {
        let mut items = Vec::with_capacity(l.len());
        while let Ok(name) = l.remove_front() {
            items.push(name);
        }
        items
    }
}

impl<'a> IntoIterator for &'a ItemList {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
