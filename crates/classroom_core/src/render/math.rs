//! Math-segment interpreter for TEXT materials.
//!
//! Scans authored text left to right and tokenizes it into an ordered list
//! of segments. Two delimiter forms are recognized, tried in priority at
//! each position:
//!
//! 1. `$$...$$` display math, shortest match, may span newlines
//! 2. `$...$` inline math, shortest match, no interior `$`, must not span a
//!    newline
//!
//! Everything else is literal prose; newlines inside literals are rendering
//! hints (line breaks), not structure. Unterminated delimiters fall into the
//! literal remainder instead of erroring.
//!
//! Invariant: segment sources exactly partition the input. Re-concatenating
//! the source text of every segment reproduces the input byte-for-byte.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Display math first so `$$` is never consumed as two empty inline regions;
/// inline math forbids `$` and newlines inside the region.
static MATH_REGION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\$(?s:.+?)\$\$|\$[^$\n]+?\$").expect("math region pattern is valid")
});

/// One source segment of a TEXT material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal prose between math regions.
    Literal {
        /// The prose text, newlines included.
        text: String,
    },
    /// A delimited math region.
    Math {
        /// The region exactly as authored, delimiters included.
        source: String,
        /// The LaTeX body with delimiters stripped.
        body: String,
        /// True for `$$...$$` (block layout), false for `$...$` (inline).
        display: bool,
    },
}

impl Segment {
    /// The source text this segment covers.
    #[must_use]
    pub fn source(&self) -> &str {
        match self {
            Self::Literal { text } => text,
            Self::Math { source, .. } => source,
        }
    }
}

/// Splits input into literal and math segments.
///
/// Empty input yields no segments. Adjacent literals never occur; segments
/// appear in input order and partition the input exactly.
#[must_use]
pub fn split_segments(input: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for m in MATH_REGION.find_iter(input) {
        if m.start() > cursor {
            segments.push(Segment::Literal {
                text: input[cursor..m.start()].to_string(),
            });
        }
        let source = m.as_str();
        let display = source.starts_with("$$");
        let body = if display {
            &source[2..source.len() - 2]
        } else {
            &source[1..source.len() - 1]
        };
        segments.push(Segment::Math {
            source: source.to_string(),
            body: body.to_string(),
            display,
        });
        cursor = m.end();
    }

    if cursor < input.len() {
        segments.push(Segment::Literal {
            text: input[cursor..].to_string(),
        });
    }
    segments
}

/// Error raised by a typesetting collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("typesetting failed: {0}")]
pub struct TypesetError(pub String);

/// External math-typesetting engine seam.
///
/// Implementations convert a LaTeX body into display markup. They are
/// expected to report failure through the `Result` rather than panic; the
/// caller degrades a failed segment to its flagged source text.
pub trait Typesetter {
    /// Typesets one math region.
    ///
    /// # Errors
    ///
    /// [`TypesetError`] when the engine cannot process the source.
    fn render(&self, source: &str, display_mode: bool) -> Result<String, TypesetError>;
}

/// Typesetter that emits delimiter-annotated, HTML-escaped markup for a
/// client-side engine to process. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTypesetter;

impl Typesetter for PlainTypesetter {
    fn render(&self, source: &str, display_mode: bool) -> Result<String, TypesetError> {
        let class = if display_mode {
            "math math-display"
        } else {
            "math math-inline"
        };
        Ok(format!(
            "<span class=\"{class}\">{}</span>",
            super::html::escape(source)
        ))
    }
}

/// One rendered segment of a TEXT material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedSegment {
    /// Literal prose; newlines become line breaks downstream.
    Literal {
        /// The prose text.
        text: String,
    },
    /// Successfully typeset math.
    Math {
        /// Engine-produced markup.
        markup: String,
        /// Block versus inline layout.
        display: bool,
    },
    /// A math region the engine rejected; shown as flagged source text so
    /// sibling segments still render.
    Failed {
        /// The region exactly as authored, delimiters included.
        source: String,
    },
}

/// Segments the input and typesets each math region through the engine.
///
/// A failed region degrades to [`RenderedSegment::Failed`] without blocking
/// the rest of the segment list.
pub fn typeset_segments(input: &str, engine: &dyn Typesetter) -> Vec<RenderedSegment> {
    split_segments(input)
        .into_iter()
        .map(|segment| match segment {
            Segment::Literal { text } => RenderedSegment::Literal { text },
            Segment::Math {
                source,
                body,
                display,
            } => match engine.render(&body, display) {
                Ok(markup) => RenderedSegment::Math { markup, display },
                Err(err) => {
                    log::warn!("math segment failed to typeset: {err}");
                    RenderedSegment::Failed { source }
                }
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Engine that rejects everything, for exercising the failure boundary.
    struct RejectingEngine;

    impl Typesetter for RejectingEngine {
        fn render(&self, _source: &str, _display_mode: bool) -> Result<String, TypesetError> {
            Err(TypesetError("unsupported macro".to_string()))
        }
    }

    fn reassemble(segments: &[Segment]) -> String {
        segments.iter().map(Segment::source).collect()
    }

    #[test]
    fn test_inline_math_between_prose() {
        let segments = split_segments("a $x^2$ b");
        assert_eq!(
            segments,
            vec![
                Segment::Literal {
                    text: "a ".to_string()
                },
                Segment::Math {
                    source: "$x^2$".to_string(),
                    body: "x^2".to_string(),
                    display: false,
                },
                Segment::Literal {
                    text: " b".to_string()
                },
            ]
        );
        assert_eq!(reassemble(&segments), "a $x^2$ b");
    }

    #[test]
    fn test_unterminated_delimiter_stays_literal() {
        let segments = split_segments("cost is $5");
        assert_eq!(
            segments,
            vec![Segment::Literal {
                text: "cost is $5".to_string()
            }]
        );
    }

    #[test]
    fn test_display_math_spans_newlines() {
        let input = "$$\na\nb\n$$";
        let segments = split_segments(input);
        assert_eq!(
            segments,
            vec![Segment::Math {
                source: input.to_string(),
                body: "\na\nb\n".to_string(),
                display: true,
            }]
        );
    }

    #[test]
    fn test_inline_math_does_not_span_newlines() {
        let segments = split_segments("price $a\nb$ here");
        assert_eq!(
            segments,
            vec![Segment::Literal {
                text: "price $a\nb$ here".to_string()
            }]
        );
    }

    #[test]
    fn test_display_takes_priority_over_inline() {
        let segments = split_segments("$$x$$");
        assert_eq!(
            segments,
            vec![Segment::Math {
                source: "$$x$$".to_string(),
                body: "x".to_string(),
                display: true,
            }]
        );
    }

    #[test]
    fn test_mixed_regions_partition_input() {
        let input = "intro $a+b$ middle\n$$\\sum_i i$$ outro $c$";
        let segments = split_segments(input);
        assert_eq!(reassemble(&segments), input);
        let math_count = segments
            .iter()
            .filter(|s| matches!(s, Segment::Math { .. }))
            .count();
        assert_eq!(math_count, 3);
    }

    #[test]
    fn test_empty_input_yields_no_segments() {
        assert!(split_segments("").is_empty());
    }

    #[test]
    fn test_bare_double_dollar_is_literal() {
        assert_eq!(
            split_segments("$$"),
            vec![Segment::Literal {
                text: "$$".to_string()
            }]
        );
    }

    #[test]
    fn test_failed_region_degrades_to_flagged_source() {
        let rendered = typeset_segments("a $x$ b", &RejectingEngine);
        assert_eq!(
            rendered,
            vec![
                RenderedSegment::Literal {
                    text: "a ".to_string()
                },
                RenderedSegment::Failed {
                    source: "$x$".to_string()
                },
                RenderedSegment::Literal {
                    text: " b".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_plain_typesetter_escapes_markup() {
        let markup = PlainTypesetter.render("a < b", false).unwrap();
        assert_eq!(markup, "<span class=\"math math-inline\">a &lt; b</span>");
    }

    #[test]
    fn test_plain_typesetter_marks_display_mode() {
        let markup = PlainTypesetter.render("x", true).unwrap();
        assert!(markup.contains("math-display"));
    }
}
