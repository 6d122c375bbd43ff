//! Element access over a parsed document tree
//!
//! The builder only needs a handful of queries per element. They are
//! expressed as a trait so the builder does not depend on a particular
//! XML tree implementation.

/// Read-only queries on one element of a document tree
pub trait ElementAccess: Copy {
    /// Local tag name, without namespace prefix
    fn tag(&self) -> &str;

    fn attribute(&self, name: &str) -> Option<&str>;

    fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    fn attribute_or(&self, name: &str, default: &str) -> String {
        self.attribute(name).unwrap_or(default).to_string()
    }

    /// Text content of the element
    fn text(&self) -> Option<&str>;

    /// First descendant element (excluding self) with this local tag name,
    /// in document order
    fn first_descendant(&self, tag: &str) -> Option<Self>;

    /// All descendant elements (excluding self) with this local tag name,
    /// in document order
    fn descendants(&self, tag: &str) -> Vec<Self>;

    /// First direct child element with this local tag name
    fn first_child(&self, tag: &str) -> Option<Self>;

    /// Direct child elements with this local tag name, in document order
    fn children(&self, tag: &str) -> Vec<Self>;
}

impl<'a, 'input: 'a> ElementAccess for roxmltree::Node<'a, 'input> {
    fn tag(&self) -> &str {
        self.tag_name().name()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        roxmltree::Node::attribute(self, name)
    }

    fn text(&self) -> Option<&str> {
        roxmltree::Node::text(self)
    }

    fn first_descendant(&self, tag: &str) -> Option<Self> {
        roxmltree::Node::descendants(self)
            .skip(1)
            .find(|n| n.is_element() && n.tag_name().name() == tag)
    }

    fn descendants(&self, tag: &str) -> Vec<Self> {
        roxmltree::Node::descendants(self)
            .skip(1)
            .filter(|n| n.is_element() && n.tag_name().name() == tag)
            .collect()
    }

    fn first_child(&self, tag: &str) -> Option<Self> {
        roxmltree::Node::children(self).find(|n| n.is_element() && n.tag_name().name() == tag)
    }

    fn children(&self, tag: &str) -> Vec<Self> {
        roxmltree::Node::children(self)
            .filter(|n| n.is_element() && n.tag_name().name() == tag)
            .collect()
    }
}
