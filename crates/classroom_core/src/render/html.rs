//! Flattening rendered views into HTML documents.
//!
//! Kept deliberately minimal: structure only, no styling. The preview and
//! CLI binaries write these documents straight to disk.

use crate::material::Material;

use super::{RenderedSegment, RenderedView, VideoSource};

/// Escapes the five HTML metacharacters.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn push_segment(out: &mut String, segment: &RenderedSegment) {
    match segment {
        RenderedSegment::Literal { text } => {
            // Newlines in literals are rendering hints, not structure.
            out.push_str(&escape(text).replace('\n', "<br>\n"));
        }
        RenderedSegment::Math { markup, .. } => out.push_str(markup),
        RenderedSegment::Failed { source } => {
            out.push_str("<code class=\"math-error\">");
            out.push_str(&escape(source));
            out.push_str("</code>");
        }
    }
}

fn push_view(out: &mut String, view: &RenderedView) {
    match view {
        RenderedView::Text(segments) => {
            out.push_str("<div class=\"material-text\">");
            for segment in segments {
                push_segment(out, segment);
            }
            out.push_str("</div>\n");
        }
        RenderedView::Video(source) => match source {
            VideoSource::Embed { .. } => {
                out.push_str(&format!(
                    "<iframe src=\"{}\" allowfullscreen></iframe>\n",
                    escape(&source.embed_url())
                ));
            }
            VideoSource::Raw { url } => {
                let url = escape(url);
                out.push_str(&format!("<a href=\"{url}\">{url}</a>\n"));
            }
        },
        RenderedView::File(link) => {
            // Empty state renders nothing at all.
            if let Some(link) = link {
                out.push_str(&format!(
                    "<a class=\"download\" href=\"{}\" download>{}</a>\n",
                    escape(&link.url),
                    escape(&link.label)
                ));
            }
        }
        RenderedView::Model(model) => {
            let ar = if model.ar_enabled { " ar" } else { "" };
            out.push_str(&format!(
                "<model-viewer src=\"{}\" scale=\"{s} {s} {s}\" camera-controls{ar}></model-viewer>\n",
                escape(&model.url),
                s = model.scale,
            ));
        }
    }
}

/// Renders a full HTML document for one material.
#[must_use]
pub fn material_document(material: &Material, view: &RenderedView) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>");
    out.push_str(&escape(&material.title));
    out.push_str("</title></head>\n<body>\n<h1>");
    out.push_str(&escape(&material.title));
    out.push_str("</h1>\n");
    if let Some(description) = &material.description {
        out.push_str("<p class=\"description\">");
        out.push_str(&escape(description));
        out.push_str("</p>\n");
    }
    push_view(&mut out, view);
    out.push_str("</body>\n</html>\n");
    out
}
