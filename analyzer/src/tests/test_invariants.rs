//! Properties that must hold for every document in a small corpus.

use crate::{Document, YamlPathEdits, parse};

const CORPUS: &[&str] = &[
    "server:\n  port: 8080\n  address: localhost\nspring:\n  profiles:\n    active: dev\n",
    "items:\n  - name: a\n    value: 1\n  - b\n",
    "# header\na: 1\n\t b: 2\n  # note\n  c: x:y\n",
    "logging:\n  level:\n    root: INFO\n    web:\n",
    "a:\r\n  b: 1\r\n\r\n  c:\r\n",
    "empty:",
];

#[test]
fn existing_paths_need_no_text_changes() {
    for text in CORPUS {
        let doc = Document::new(*text);
        let structure = parse(&doc);
        for (id, node) in structure.iter() {
            let (Some(colon), Some(path)) = (node.colon_offset(), structure.key_path(id)) else {
                continue;
            };
            let mut path_edits = YamlPathEdits::new(&doc, &structure);
            path_edits
                .create_path(&path, "")
                .unwrap_or_else(|err| panic!("{text:?} {path}: {err}"));
            let edits = path_edits.into_edits();
            assert!(!edits.has_text_changes(), "{text:?} {path}");

            let cursor = edits
                .preview(&doc)
                .expect("valid edits")
                .cursor
                .expect("cursor placed");
            assert!(
                colon < cursor && cursor <= node.tree_end,
                "{text:?} {path}: cursor {cursor} outside {}..={}",
                colon + 1,
                node.tree_end
            );
        }
    }
}

#[test]
fn created_paths_exist_afterwards() {
    for text in CORPUS {
        for property in ["a.x", "logging.level.web", "new.nested.key"] {
            let mut doc = Document::new(*text);
            let path = crate::YamlPath::from_property(property);
            crate::ensure_path(&mut doc, &path, "1")
                .unwrap_or_else(|err| panic!("{text:?} {property}: {err}"));

            let structure = parse(&doc);
            let mut node = structure.root();
            for segment in path.segments() {
                node = structure
                    .find_child_for_key(node, segment.to_prop_string())
                    .unwrap_or_else(|| panic!("{property} missing in {:?}", doc.text()));
            }
        }
    }
}
