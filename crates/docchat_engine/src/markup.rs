//! Formatting pass for assistant answers.
//!
//! Answers arrive as lightweight markup (markdown). This flattens them into
//! display lines the shell can style: emphasis markers are dropped, soft
//! breaks join with a space, fenced code keeps its own line kind.

use pulldown_cmark::{Event, Parser, Tag, TagEnd};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Paragraph,
    Heading,
    Bullet,
    Code,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupLine {
    pub kind: LineKind,
    pub text: String,
}

pub fn render_markup(source: &str) -> Vec<MarkupLine> {
    let mut lines = Vec::new();
    let mut buffer = String::new();
    let mut kind = LineKind::Paragraph;

    for event in Parser::new(source) {
        match event {
            Event::Start(Tag::Heading { .. }) => {
                flush(&mut lines, &mut buffer, kind);
                kind = LineKind::Heading;
            }
            Event::Start(Tag::CodeBlock(_)) => {
                flush(&mut lines, &mut buffer, kind);
                kind = LineKind::Code;
            }
            Event::Start(Tag::Item) => {
                flush(&mut lines, &mut buffer, kind);
                kind = LineKind::Bullet;
            }
            Event::End(TagEnd::CodeBlock) => {
                flush_code(&mut lines, &mut buffer);
                kind = LineKind::Paragraph;
            }
            Event::End(TagEnd::Heading(_)) | Event::End(TagEnd::Paragraph)
            | Event::End(TagEnd::Item) => {
                flush(&mut lines, &mut buffer, kind);
                kind = LineKind::Paragraph;
            }
            Event::Text(text) => buffer.push_str(&text),
            Event::Code(code) => buffer.push_str(&code),
            Event::SoftBreak => buffer.push(' '),
            Event::HardBreak => flush(&mut lines, &mut buffer, kind),
            _ => {}
        }
    }
    flush(&mut lines, &mut buffer, kind);
    lines
}

fn flush(lines: &mut Vec<MarkupLine>, buffer: &mut String, kind: LineKind) {
    let text = std::mem::take(buffer);
    let text = text.trim_end();
    if text.is_empty() {
        return;
    }
    lines.push(MarkupLine {
        kind,
        text: text.to_string(),
    });
}

// Fenced blocks keep internal line structure; one display line per source line.
fn flush_code(lines: &mut Vec<MarkupLine>, buffer: &mut String) {
    let block = std::mem::take(buffer);
    for line in block.trim_end_matches('\n').lines() {
        lines.push(MarkupLine {
            kind: LineKind::Code,
            text: line.to_string(),
        });
    }
}
