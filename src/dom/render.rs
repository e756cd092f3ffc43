//! HTML projection of a [`Document`], used by the server to ship the page.

use std::fmt::Write;

use super::{Document, ElementId};

const VOID_ELEMENTS: &[&str] = &["input", "br", "hr", "img", "meta", "link"];

pub fn to_html(doc: &Document) -> String {
    let mut out = String::new();
    write_element(doc, doc.body(), &mut out);
    out
}

pub fn element_to_html(doc: &Document, id: ElementId) -> String {
    let mut out = String::new();
    write_element(doc, id, &mut out);
    out
}

fn write_element(doc: &Document, id: ElementId, out: &mut String) {
    let Some(el) = doc.element(id) else {
        return;
    };
    let tag = el.tag();
    out.push('<');
    out.push_str(tag);
    if let Some(id_attr) = el.id() {
        let _ = write!(out, " id=\"{}\"", escape_attr(id_attr));
    }
    if !el.classes().is_empty() {
        let _ = write!(out, " class=\"{}\"", escape_attr(&el.classes().join(" ")));
    }
    for (name, value) in el.attrs() {
        let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
    }
    if (tag == "input" || tag == "option") && (!el.value().is_empty() || tag == "option") {
        let _ = write!(out, " value=\"{}\"", escape_attr(el.value()));
    }
    if el.is_disabled() {
        out.push_str(" disabled");
    }
    if el.is_selected() {
        out.push_str(" selected");
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&tag) {
        return;
    }
    out.push_str(&escape_text(el.text()));
    for child in el.children() {
        write_element(doc, *child, out);
    }
    let _ = write!(out, "</{tag}>");
}

pub fn escape_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

fn escape_attr(raw: &str) -> String {
    escape_text(raw).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_attributes_and_state() {
        let mut doc = Document::new();
        let select = doc.create_element("select");
        doc.set_id(select, "fromCity");
        doc.append_child(doc.body(), select);
        doc.append_option(select, "", "Select departure city", true, true);

        let html = to_html(&doc);
        assert_eq!(
            html,
            "<body><select id=\"fromCity\"><option value=\"\" disabled selected>Select departure city</option></select></body>"
        );
    }

    #[test]
    fn escapes_text_and_attributes() {
        let mut doc = Document::new();
        let span = doc.create_element("span");
        doc.set_attr(span, "title", "a \"b\" <c>");
        doc.set_text(span, "x & y");
        doc.append_child(doc.body(), span);

        assert_eq!(
            element_to_html(&doc, span),
            "<span title=\"a &quot;b&quot; &lt;c&gt;\">x &amp; y</span>"
        );
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let mut doc = Document::new();
        let input = doc.create_element("input");
        doc.set_attr(input, "type", "hidden");
        doc.set_value(input, "500");
        doc.append_child(doc.body(), input);

        assert_eq!(element_to_html(&doc, input), "<input type=\"hidden\" value=\"500\">");
    }
}
