//! Minimal in-memory attribute vectors.

use tavira_search::attribute::{AttributeVector, EnumHandle};
use tavira_search::queryeval::DocId;

/// Single-valued string attribute with an enumeration dictionary: one value
/// per document, values interned into a sorted dictionary.
pub struct StringEnumAttribute {
    dictionary: Vec<String>,
    doc_enums: Vec<EnumHandle>,
    multi_value: bool,
}

impl StringEnumAttribute {
    /// Builds the attribute from one value per document, in document order.
    pub fn from_values(values: &[&str]) -> StringEnumAttribute {
        let mut dictionary: Vec<String> = values.iter().map(|value| value.to_string()).collect();
        dictionary.sort();
        dictionary.dedup();
        let doc_enums = values
            .iter()
            .map(|&value| {
                dictionary
                    .binary_search_by(|entry| entry.as_str().cmp(value))
                    .map(|index| index as EnumHandle)
            })
            .collect::<Result<Vec<_>, _>>()
            .expect("dictionary covers every document value");
        StringEnumAttribute {
            dictionary,
            doc_enums,
            multi_value: false,
        }
    }

    /// Reports the attribute as multi-valued, for exercising planner
    /// preconditions. The stored values stay one per document.
    pub fn mark_multi_value(mut self) -> StringEnumAttribute {
        self.multi_value = true;
        self
    }

    /// Document ids holding `value`, in ascending order.
    pub fn docs_with_value(&self, value: &str) -> Vec<DocId> {
        match self.find_enum(value) {
            Some(handle) => self
                .doc_enums
                .iter()
                .enumerate()
                .filter(|&(_, &doc_handle)| doc_handle == handle)
                .map(|(doc_id, _)| doc_id as DocId)
                .collect(),
            None => Vec::new(),
        }
    }
}

impl AttributeVector for StringEnumAttribute {
    fn num_docs(&self) -> u32 {
        self.doc_enums.len() as u32
    }

    fn has_multi_value(&self) -> bool {
        self.multi_value
    }

    fn is_string_type(&self) -> bool {
        true
    }

    fn has_enum(&self) -> bool {
        true
    }

    fn is_integer_type(&self) -> bool {
        false
    }

    fn find_enum(&self, value: &str) -> Option<EnumHandle> {
        self.dictionary
            .binary_search_by(|entry| entry.as_str().cmp(value))
            .ok()
            .map(|index| index as EnumHandle)
    }

    fn get_enum(&self, doc_id: DocId) -> EnumHandle {
        self.doc_enums[doc_id as usize]
    }
}

/// Single-valued integer attribute: one `i64` per document.
pub struct IntegerAttribute {
    values: Vec<i64>,
    multi_value: bool,
}

impl IntegerAttribute {
    /// Builds the attribute from one value per document, in document order.
    pub fn from_values(values: &[i64]) -> IntegerAttribute {
        IntegerAttribute {
            values: values.to_vec(),
            multi_value: false,
        }
    }

    /// Reports the attribute as multi-valued, for exercising planner
    /// preconditions. The stored values stay one per document.
    pub fn mark_multi_value(mut self) -> IntegerAttribute {
        self.multi_value = true;
        self
    }

    /// Document ids holding `value`, in ascending order.
    pub fn docs_with_value(&self, value: i64) -> Vec<DocId> {
        self.values
            .iter()
            .enumerate()
            .filter(|&(_, &doc_value)| doc_value == value)
            .map(|(doc_id, _)| doc_id as DocId)
            .collect()
    }
}

impl AttributeVector for IntegerAttribute {
    fn num_docs(&self) -> u32 {
        self.values.len() as u32
    }

    fn has_multi_value(&self) -> bool {
        self.multi_value
    }

    fn is_string_type(&self) -> bool {
        false
    }

    fn has_enum(&self) -> bool {
        false
    }

    fn is_integer_type(&self) -> bool {
        true
    }

    fn get_int(&self, doc_id: DocId) -> i64 {
        self.values[doc_id as usize]
    }
}
