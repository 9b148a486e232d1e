//! DOM navigation helpers.
//!
//! Revio metadata documents namespace-qualify most elements
//! (`http://pacificbiosciences.com/...`); all helpers here match on local
//! names only, so the same code reads namespaced and plain documents.

use roxmltree::Node;

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use revio_converter::xml::get_tag_name;
///
/// let xml = r#"<BioSamples xmlns="http://pacificbiosciences.com/PacBioSampleInfo.xsd"/>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(get_tag_name(doc.root_element()), "BioSamples");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Find the first child element with the given local tag name.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use revio_converter::xml::find_child;
///
/// let xml = r#"<CollectionMetadata><WellSample/><Primary/></CollectionMetadata>"#;
/// let doc = Document::parse(xml).unwrap();
/// let collection = doc.root_element();
///
/// assert!(find_child(collection, "WellSample").is_some());
/// assert!(find_child(collection, "Secondary").is_none());
/// ```
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && get_tag_name(*child) == tag)
}

/// Find all child elements with the given local tag name, in document order.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use revio_converter::xml::find_children;
///
/// let xml = r#"<Runs><Run/><Run/></Runs>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// let runs: Vec<_> = find_children(doc.root_element(), "Run").collect();
/// assert_eq!(runs.len(), 2);
/// ```
pub fn find_children<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |child| child.is_element() && get_tag_name(*child) == tag)
}

/// Get the text content of a node, trimmed. Empty string if the node has no
/// text.
pub fn get_text(node: Node<'_, '_>) -> String {
    node.text()
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// Get an attribute value from a node.
pub fn get_attribute<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attribute(name)
}
