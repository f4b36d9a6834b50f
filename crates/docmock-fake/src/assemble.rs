//! Rebuilds nested documents from dotted field names.

use docmock::value::{Document, MockValue};
use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::error::MockError;

enum Node {
    Leaf(MockValue),
    Branch(IndexMap<String, Node>),
}

/// Collects `(field name, value)` pairs for one schema level and folds them
/// into a single document.
///
/// `"a.b.c"` and `"a.b.d"` share one `a.b` sub-document. Keys keep the order
/// in which they first appear.
pub(crate) struct Assembler<'p> {
    prefix: &'p str,
    root: IndexMap<String, Node>,
}

impl<'p> Assembler<'p> {
    /// `prefix` is only used to report full paths in errors.
    pub(crate) fn new(prefix: &'p str) -> Self {
        Self {
            prefix,
            root: IndexMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, name: &str, value: MockValue) -> Result<(), MockError> {
        let segments: Vec<&str> = name.split('.').collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(MockError::InvalidPath(self.full_path(name)));
        }
        let Some((leaf, parents)) = segments.split_last() else {
            return Err(MockError::InvalidPath(self.full_path(name)));
        };

        let mut level = &mut self.root;
        for (i, segment) in parents.iter().enumerate() {
            let node = level
                .entry((*segment).to_string())
                .or_insert_with(|| Node::Branch(IndexMap::new()));
            level = match node {
                Node::Branch(children) => children,
                Node::Leaf(_) => {
                    let path = segments[..=i].join(".");
                    return Err(conflict(self.prefix, &path));
                }
            };
        }

        match level.entry((*leaf).to_string()) {
            Entry::Occupied(_) => Err(conflict(self.prefix, name)),
            Entry::Vacant(slot) => {
                slot.insert(Node::Leaf(value));
                Ok(())
            }
        }
    }

    pub(crate) fn finish(self) -> MockValue {
        MockValue::Document(into_document(self.root))
    }

    fn full_path(&self, name: &str) -> String {
        join_path(self.prefix, name)
    }
}

fn into_document(nodes: IndexMap<String, Node>) -> Document {
    nodes
        .into_iter()
        .map(|(key, node)| {
            let value = match node {
                Node::Leaf(value) => value,
                Node::Branch(children) => MockValue::Document(into_document(children)),
            };
            (key, value)
        })
        .collect()
}

fn conflict(prefix: &str, path: &str) -> MockError {
    MockError::PathConflict {
        path: join_path(prefix, path),
    }
}

/// `prefix.name`, or just `name` at the root.
pub(crate) fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> MockValue {
        MockValue::String(v.to_string())
    }

    #[test]
    fn shared_prefixes_share_one_document() {
        let mut asm = Assembler::new("");
        asm.insert("field1.field2.field3", s("a")).unwrap();
        asm.insert("top", s("b")).unwrap();
        asm.insert("field1.field2.field4", s("c")).unwrap();
        let doc = asm.finish();

        let keys: Vec<_> = doc.as_document().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["field1", "top"]);
        let inner = doc.get_path("field1.field2").unwrap().as_document().unwrap();
        assert_eq!(inner.len(), 2);
        assert_eq!(doc.get_path("field1.field2.field4"), Some(&s("c")));
    }

    #[test]
    fn leaf_then_container_conflicts() {
        let mut asm = Assembler::new("");
        asm.insert("a", s("x")).unwrap();
        let err = asm.insert("a.b", s("y")).unwrap_err();
        assert!(matches!(err, MockError::PathConflict { ref path } if path == "a"));
    }

    #[test]
    fn container_then_leaf_conflicts() {
        let mut asm = Assembler::new("user");
        asm.insert("a.b", s("x")).unwrap();
        let err = asm.insert("a", s("y")).unwrap_err();
        assert!(matches!(err, MockError::PathConflict { ref path } if path == "user.a"));
    }

    #[test]
    fn empty_segments_are_invalid() {
        let mut asm = Assembler::new("");
        for name in ["", ".a", "a.", "a..b"] {
            let err = asm.insert(name, MockValue::Null).unwrap_err();
            assert!(matches!(err, MockError::InvalidPath(_)), "{name:?}");
        }
    }

    #[test]
    fn join() {
        assert_eq!(join_path("", "a"), "a");
        assert_eq!(join_path("hobbies[0]", "name"), "hobbies[0].name");
    }
}
