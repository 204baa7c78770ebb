use std::fmt::Write as _;

use crate::error::RenderError;
use crate::sink::{NodeId, RenderSink, Role};

/// Content of a single element.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Text(String),
    /// Markup produced by a markdown renderer, emitted without escaping.
    Html(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub role: Role,
    pub classes: Vec<String>,
    /// Attributes in insertion order; setting an existing name overwrites it.
    pub attributes: Vec<(String, String)>,
    pub styles: Vec<(String, String)>,
    pub content: Option<Content>,
    pub children: Vec<NodeId>,
}

impl Element {
    fn new(role: Role, classes: &[&str]) -> Self {
        Element {
            role,
            classes: classes.iter().map(|c| c.to_string()).collect(),
            attributes: Vec::new(),
            styles: Vec::new(),
            content: None,
            children: Vec::new(),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(k, _)| k == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Plain text content, if any was set with `set_text`.
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            Some(Content::Text(text)) => Some(text),
            _ => None,
        }
    }
}

/// An in-memory element tree. Node 0 is the root; nodes live in an arena and
/// are addressed by index.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementTree {
    elements: Vec<Element>,
}

impl Default for ElementTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementTree {
    pub fn new() -> Self {
        ElementTree {
            elements: vec![Element::new(Role::Root, &[])],
        }
    }

    pub fn get(&self, node: NodeId) -> Option<&Element> {
        self.elements.get(node.0)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.len() <= 1
    }

    /// All nodes with the given role, in document order.
    pub fn find_by_role(&self, role: Role) -> Vec<NodeId> {
        let mut found = Vec::new();
        self.walk(NodeId(0), &mut |id, element| {
            if element.role == role {
                found.push(id);
            }
        });
        found
    }

    /// Texts of all nodes with the given role, in document order.
    pub fn texts_by_role(&self, role: Role) -> Vec<String> {
        self.find_by_role(role)
            .into_iter()
            .filter_map(|id| self.get(id))
            .map(|element| match &element.content {
                Some(Content::Text(text)) | Some(Content::Html(text)) => text.clone(),
                None => String::new(),
            })
            .collect()
    }

    fn walk(&self, node: NodeId, visit: &mut dyn FnMut(NodeId, &Element)) {
        let Some(element) = self.get(node) else {
            return;
        };
        visit(node, element);
        for child in &element.children {
            self.walk(*child, visit);
        }
    }

    fn element_mut(&mut self, node: NodeId) -> Result<&mut Element, RenderError> {
        self.elements
            .get_mut(node.0)
            .ok_or(RenderError::UnknownNode(node))
    }

    /// Indented outline of roles, attributes and content under the root, one
    /// node per line. Styles and classes are left out.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        for child in &self.elements[0].children {
            self.write_outline(*child, 0, &mut out);
        }
        out
    }

    fn write_outline(&self, node: NodeId, depth: usize, out: &mut String) {
        let Some(element) = self.get(node) else {
            return;
        };
        out.push_str(&"  ".repeat(depth));
        out.push_str(element.role.name());
        for (name, value) in &element.attributes {
            let _ = write!(out, " {}={:?}", name, value);
        }
        match &element.content {
            Some(Content::Text(text)) => {
                let _ = write!(out, " {:?}", text);
            }
            Some(Content::Html(html)) => {
                let _ = write!(out, " html={:?}", html);
            }
            None => {}
        }
        out.push('\n');
        for child in &element.children {
            self.write_outline(*child, depth + 1, out);
        }
    }

    /// Serialize everything under the root as HTML `div`s.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for child in &self.elements[0].children {
            self.write_html(*child, &mut out);
        }
        out
    }

    fn write_html(&self, node: NodeId, out: &mut String) {
        let Some(element) = self.get(node) else {
            return;
        };

        out.push_str("<div");
        if !element.classes.is_empty() {
            let classes = element.classes.join(" ");
            let _ = write!(
                out,
                " class=\"{}\"",
                html_escape::encode_double_quoted_attribute(&classes)
            );
        }
        for (name, value) in &element.attributes {
            let _ = write!(
                out,
                " {}=\"{}\"",
                name,
                html_escape::encode_double_quoted_attribute(value)
            );
        }
        if !element.styles.is_empty() {
            let style = element
                .styles
                .iter()
                .map(|(property, value)| format!("{}: {};", property, value))
                .collect::<Vec<_>>()
                .join(" ");
            let _ = write!(
                out,
                " style=\"{}\"",
                html_escape::encode_double_quoted_attribute(&style)
            );
        }
        out.push('>');

        match &element.content {
            Some(Content::Text(text)) => out.push_str(&html_escape::encode_text(text)),
            Some(Content::Html(html)) => out.push_str(html),
            None => {}
        }
        for child in &element.children {
            self.write_html(*child, out);
        }
        out.push_str("</div>");
    }
}

impl RenderSink for ElementTree {
    fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn create_element(
        &mut self,
        parent: NodeId,
        role: Role,
        classes: &[&str],
    ) -> Result<NodeId, RenderError> {
        let id = NodeId(self.elements.len());
        self.element_mut(parent)?.children.push(id);
        self.elements.push(Element::new(role, classes));
        Ok(id)
    }

    fn set_text(&mut self, node: NodeId, text: &str) -> Result<(), RenderError> {
        self.element_mut(node)?.content = Some(Content::Text(text.to_string()));
        Ok(())
    }

    fn append_html(&mut self, node: NodeId, html: &str) -> Result<(), RenderError> {
        let element = self.element_mut(node)?;
        let combined = match element.content.take() {
            Some(Content::Html(existing)) => existing + html,
            Some(Content::Text(text)) => html_escape::encode_text(&text).into_owned() + html,
            None => html.to_string(),
        };
        element.content = Some(Content::Html(combined));
        Ok(())
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<(), RenderError> {
        let element = self.element_mut(node)?;
        match element.attributes.iter_mut().find(|(k, _)| k == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => element
                .attributes
                .push((name.to_string(), value.to_string())),
        }
        Ok(())
    }

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) -> Result<(), RenderError> {
        let element = self.element_mut(node)?;
        match element.styles.iter_mut().find(|(k, _)| k == property) {
            Some((_, existing)) => *existing = value.to_string(),
            None => element
                .styles
                .push((property.to_string(), value.to_string())),
        }
        Ok(())
    }
}
