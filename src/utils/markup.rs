//! Typed markup fragments.
//!
//! Templates build [`Element`] values instead of raw strings; a DOM backend
//! turns them into real nodes and [`fmt::Display`] serializes them to
//! escaped HTML.

use std::fmt;

use v_htmlescape::escape;

/// A markup node: an element or a run of text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Markup {
    Element(Element),
    Text(String),
}

/// An element with its classes, attributes and children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub classes: Vec<String>,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Markup>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            classes: Vec::new(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add a class. Empty names and duplicates are ignored.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !class.is_empty() && !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Markup::Element(child));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Markup::Text(text.into()));
        self
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        if !self.classes.is_empty() {
            write!(f, " class=\"{}\"", escape(&self.classes.join(" ")))?;
        }
        for (name, value) in &self.attributes {
            write!(f, " {}=\"{}\"", name, escape(value))?;
        }
        write!(f, ">")?;
        for child in &self.children {
            write!(f, "{}", child)?;
        }
        write!(f, "</{}>", self.tag)
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(element) => element.fmt(f),
            Self::Text(text) => write!(f, "{}", escape(text)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_nested_elements() {
        let li = Element::new("li")
            .with_class("leaf")
            .with_child(Element::new("span").with_class("sp-toggle"))
            .with_child(Element::new("a").with_attribute("href", "#a").with_text("A"));

        assert_eq!(
            li.to_string(),
            r##"<li class="leaf"><span class="sp-toggle"></span><a href="#a">A</a></li>"##
        );
    }

    #[test]
    fn test_escapes_text_and_attributes() {
        let a = Element::new("a")
            .with_attribute("href", "/q?a=1&b=\"2\"")
            .with_text("<script>");
        let html = a.to_string();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&amp;"));
        assert!(!html.contains("\"2\""));
    }

    #[test]
    fn test_with_class_skips_empty_and_duplicates() {
        let ul = Element::new("ul")
            .with_class("")
            .with_class("nav")
            .with_class("nav");
        assert_eq!(ul.classes, vec!["nav".to_string()]);
        assert_eq!(ul.to_string(), r#"<ul class="nav"></ul>"#);
    }
}
