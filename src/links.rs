// Internal page-to-page links. printpdf only writes URI actions, so links are
// collected while painting and written into the saved file as GoTo
// annotations through lopdf.

use printpdf::lopdf::{Dictionary, Document, Object, ObjectId};
use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::AppError;

/// A clickable rectangle on `page` jumping to `target`. Pages are 0-based
/// positions in the document; `rect` is [llx, lly, urx, ury] in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLink {
    pub page: usize,
    pub rect: [f32; 4],
    pub target: usize,
}

/// Links recorded by every canvas of one document.
#[derive(Debug, Default)]
pub struct LinkTable {
    links: RefCell<Vec<PageLink>>,
}

impl LinkTable {
    pub fn push(&self, link: PageLink) {
        self.links.borrow_mut().push(link);
    }

    pub fn len(&self) -> usize {
        self.links.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.borrow().is_empty()
    }

    pub fn into_inner(self) -> Vec<PageLink> {
        self.links.into_inner()
    }
}

fn pdf_error(e: impl std::fmt::Display) -> AppError {
    AppError::PdfError(e.to_string())
}

fn page_ids(doc: &Document) -> Vec<ObjectId> {
    doc.get_pages().into_values().collect()
}

/// Add `links` to the serialized PDF in `pdf` and serialize it again.
pub fn write_links(pdf: &[u8], links: &[PageLink]) -> Result<Vec<u8>, AppError> {
    if links.is_empty() {
        return Ok(pdf.to_vec());
    }

    let mut doc = Document::load_mem(pdf).map_err(pdf_error)?;
    let pages = page_ids(&doc);

    for link in links {
        let (Some(&page_id), Some(&target_id)) = (pages.get(link.page), pages.get(link.target)) else {
            tracing::warn!("Link from page {} to page {} is out of range", link.page, link.target);
            continue;
        };

        let annotation = doc.add_object(goto_annotation(link.rect, target_id));
        let page = doc.get_dictionary_mut(page_id).map_err(pdf_error)?;
        let has_annots = matches!(page.get(b"Annots"), Ok(Object::Array(_)));
        if has_annots {
            if let Ok(Object::Array(annots)) = page.get_mut(b"Annots") {
                annots.push(Object::Reference(annotation));
            }
        } else {
            page.set("Annots", vec![Object::Reference(annotation)]);
        }
    }

    tracing::debug!("Wrote {} internal links", links.len());

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).map_err(pdf_error)?;
    Ok(bytes)
}

/// Borderless link annotation that jumps to the top of `target`.
fn goto_annotation(rect: [f32; 4], target: ObjectId) -> Dictionary {
    let mut action = Dictionary::new();
    action.set("S", "GoTo");
    action.set(
        "D",
        vec![
            Object::Reference(target),
            Object::Name(b"XYZ".to_vec()),
            Object::Null,
            Object::Null,
            Object::Null,
        ],
    );

    let mut annotation = Dictionary::new();
    annotation.set("Type", "Annot");
    annotation.set("Subtype", "Link");
    annotation.set("Rect", rect.iter().map(|v| Object::Real(*v)).collect::<Vec<_>>());
    annotation.set("Border", vec![Object::Integer(0), Object::Integer(0), Object::Integer(0)]);
    annotation.set("A", action);
    annotation
}

/// The GoTo links of a serialized PDF, in page order.
pub fn read_links(pdf: &[u8]) -> Result<Vec<PageLink>, AppError> {
    let doc = Document::load_mem(pdf).map_err(pdf_error)?;
    let pages = page_ids(&doc);
    let positions: HashMap<ObjectId, usize> = pages.iter().enumerate().map(|(i, id)| (*id, i)).collect();

    let mut links = Vec::new();
    for (page, page_id) in pages.iter().enumerate() {
        for annotation in doc.get_page_annotations(*page_id) {
            let Ok(action) = annotation.get(b"A").and_then(Object::as_dict) else {
                continue;
            };
            let is_goto = action
                .get(b"S")
                .and_then(Object::as_name)
                .map(|name| name == b"GoTo")
                .unwrap_or(false);
            if !is_goto {
                continue;
            }

            let target = action
                .get(b"D")
                .and_then(Object::as_array)
                .ok()
                .and_then(|dest| dest.first())
                .and_then(|first| first.as_reference().ok())
                .and_then(|id| positions.get(&id).copied());
            let rect: Vec<f32> = annotation
                .get(b"Rect")
                .and_then(Object::as_array)
                .map(|values| values.iter().filter_map(|v| v.as_float().ok()).collect())
                .unwrap_or_default();

            if let (Some(target), [llx, lly, urx, ury]) = (target, rect.as_slice()) {
                links.push(PageLink {
                    page,
                    rect: [*llx, *lly, *urx, *ury],
                    target,
                });
            }
        }
    }
    Ok(links)
}

#[cfg(test)]
mod tests {
    use super::*;
    use printpdf::{Mm, PdfDocument};

    fn blank_pdf(pages: usize) -> Vec<u8> {
        let (doc, _, _) = PdfDocument::new("Links", Mm(100.0), Mm(100.0), "Layer 1");
        for _ in 1..pages {
            doc.add_page(Mm(100.0), Mm(100.0), "Layer 1");
        }
        doc.save_to_bytes().unwrap()
    }

    #[test]
    fn test_links_survive_a_round_trip() {
        let links = vec![
            PageLink {
                page: 0,
                rect: [10.0, 20.0, 30.0, 40.0],
                target: 2,
            },
            PageLink {
                page: 2,
                rect: [1.0, 2.0, 3.0, 4.0],
                target: 0,
            },
        ];
        let pdf = write_links(&blank_pdf(3), &links).unwrap();
        assert_eq!(read_links(&pdf).unwrap(), links);
    }

    #[test]
    fn test_out_of_range_links_are_dropped() {
        let links = vec![PageLink {
            page: 0,
            rect: [0.0, 0.0, 1.0, 1.0],
            target: 7,
        }];
        let pdf = write_links(&blank_pdf(2), &links).unwrap();
        assert!(read_links(&pdf).unwrap().is_empty());
    }

    #[test]
    fn test_table_records_in_order() {
        let table = LinkTable::default();
        assert!(table.is_empty());
        table.push(PageLink {
            page: 1,
            rect: [0.0; 4],
            target: 0,
        });
        assert_eq!(table.len(), 1);
        assert_eq!(table.into_inner()[0].page, 1);
    }
}
