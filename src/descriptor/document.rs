// Fri Feb 13 2026 - Alex

use crate::descriptor::class::ClassDescriptor;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// The immutable input snapshot: class name -> descriptor, in document
/// order. Deserialization itself belongs to the front-end; this is just the
/// shape it lands in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BindingDocument {
    pub classes: IndexMap<String, ClassDescriptor>,
}

impl BindingDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self, std::io::Error> {
        let file = File::open(path)?;
        let document = serde_json::from_reader(BufReader::new(file))?;
        Ok(document)
    }

    pub fn insert(&mut self, descriptor: ClassDescriptor) {
        self.classes.insert(descriptor.name.clone(), descriptor);
    }

    pub fn class(&self, name: &str) -> Option<&ClassDescriptor> {
        self.classes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ClassDescriptor)> {
        self.classes.iter()
    }

    pub fn class_names(&self) -> impl Iterator<Item = &String> {
        self.classes.keys()
    }

    pub fn total_members(&self) -> usize {
        self.classes.values().map(|c| c.member_count()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_preserves_order() {
        let mut document = BindingDocument::new();
        document.insert(ClassDescriptor::new("Zeta", 8));
        document.insert(ClassDescriptor::new("Alpha", 8));
        let names: Vec<&String> = document.class_names().collect();
        assert_eq!(names, vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn test_document_json_shape() {
        let json = r#"{
            "classes": {
                "Foo": {
                    "name": "Foo",
                    "size": 16,
                    "public_instance": [
                        {
                            "link_symbol": "_ZN3Foo3barEi",
                            "name": "bar",
                            "kind": 0,
                            "parameters": ["int"],
                            "return_type": "int"
                        }
                    ]
                }
            }
        }"#;
        let document: BindingDocument = serde_json::from_str(json).unwrap();
        let foo = document.class("Foo").unwrap();
        assert_eq!(foo.size, 16);
        assert_eq!(foo.public_instance.len(), 1);
        assert_eq!(foo.public_instance[0].return_type, "int");
        assert_eq!(document.total_members(), 1);
    }
}
