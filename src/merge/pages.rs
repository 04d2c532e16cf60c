//! Page tree concatenation.
//!
//! [`PageAccumulator`] owns the output document. Each appended source
//! document is renumbered above the accumulator's highest object id, its
//! pages are detached from their own page tree and attached, in order, to
//! the accumulator's single `Pages` root.

use lopdf::{Dictionary, Document, Object, ObjectId, dictionary};

use crate::error::{PdfStitchError, Result};

/// Page attributes a page may inherit from its ancestors in the page tree.
const INHERITABLE_ATTRIBUTES: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Accumulating output document.
#[derive(Debug)]
pub struct PageAccumulator {
    document: Document,
    pages_id: ObjectId,
}

impl PageAccumulator {
    /// Start with an empty document: a catalog and a page tree root with no
    /// kids.
    pub fn new() -> Self {
        let mut document = Document::with_version("1.4");
        let pages_id = document.add_object(dictionary! {
            "Type" => "Pages",
            "Kids" => Vec::<Object>::new(),
            "Count" => 0,
        });
        let catalog_id = document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        document.trailer.set("Root", catalog_id);

        Self { document, pages_id }
    }

    /// Number of pages appended so far.
    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }

    /// Append every page of `source`, in its own page order.
    ///
    /// `source` is consumed; its objects move into the accumulator. Objects
    /// that only the source's page tree referenced become unreachable and
    /// are dropped when the document is saved with pruning.
    ///
    /// Returns the number of pages appended.
    ///
    /// # Errors
    ///
    /// Returns [`PdfStitchError::MergeFailed`] if a page of `source` is not a
    /// dictionary or the accumulator's page tree is damaged.
    pub fn append(&mut self, mut source: Document) -> Result<usize> {
        source.renumber_objects_with(self.document.max_id + 1);

        let page_ids: Vec<ObjectId> = source.get_pages().into_values().collect();

        for &page_id in &page_ids {
            let inherited = inherited_attributes(&source, page_id);
            let page = source.get_dictionary_mut(page_id).map_err(|e| {
                PdfStitchError::merge_failed(format!("page {page_id:?} is not a dictionary: {e}"))
            })?;

            for (key, value) in inherited {
                page.set(key, value);
            }
            page.set("Parent", self.pages_id);
        }

        if source.version > self.document.version {
            self.document.version = source.version.clone();
        }

        self.document.max_id = self.document.max_id.max(source.max_id);
        self.document.objects.extend(source.objects);

        self.attach_to_root(&page_ids)?;

        Ok(page_ids.len())
    }

    /// Push `page_ids` onto the root's `Kids` and bump `Count`.
    fn attach_to_root(&mut self, page_ids: &[ObjectId]) -> Result<()> {
        let root = self.document.get_dictionary_mut(self.pages_id).map_err(|e| {
            PdfStitchError::merge_failed(format!("failed to get pages object: {e}"))
        })?;

        let kids = root
            .get_mut(b"Kids")
            .and_then(Object::as_array_mut)
            .map_err(|_| PdfStitchError::merge_failed("pages dictionary missing Kids array"))?;
        kids.extend(page_ids.iter().map(|&id| Object::Reference(id)));

        let count = root.get(b"Count").and_then(Object::as_i64).unwrap_or(0);
        root.set("Count", count + page_ids.len() as i64);

        Ok(())
    }

    /// Give up ownership of the accumulated document.
    pub fn into_document(self) -> Document {
        self.document
    }
}

impl Default for PageAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Inheritable attributes that `page_id` lacks but one of its ancestors
/// defines, taking the nearest ancestor's value.
fn inherited_attributes(doc: &Document, page_id: ObjectId) -> Vec<(Vec<u8>, Object)> {
    let Ok(page) = doc.get_dictionary(page_id) else {
        return Vec::new();
    };

    let mut missing: Vec<&[u8]> = INHERITABLE_ATTRIBUTES
        .iter()
        .copied()
        .filter(|key| !page.has(key))
        .collect();

    let mut found = Vec::new();
    let mut visited = vec![page_id];
    let mut current = parent_of(doc, page);

    while let Some((parent_id, parent)) = current {
        if missing.is_empty() || visited.contains(&parent_id) {
            break;
        }
        visited.push(parent_id);

        missing.retain(|key| match parent.get(key) {
            Ok(value) => {
                found.push((key.to_vec(), value.clone()));
                false
            }
            Err(_) => true,
        });

        current = parent_of(doc, parent);
    }

    found
}

fn parent_of<'a>(doc: &'a Document, node: &Dictionary) -> Option<(ObjectId, &'a Dictionary)> {
    let parent_id = node.get(b"Parent").and_then(Object::as_reference).ok()?;
    let parent = doc.get_dictionary(parent_id).ok()?;
    Some((parent_id, parent))
}
