//! Markdown body rendering for collected sections.

use crate::fragment::{FragmentKind, FragmentLoader};
use crate::model::PackageSection;

const FENCE_OPEN: &str = "```go";
const FENCE_CLOSE: &str = "```";

/// Render all sections, in order, into one markdown body.
pub fn render_sections(sections: &[PackageSection], fragments: &FragmentLoader) -> String {
    let mut buf = String::new();
    for section in sections {
        render_section(&mut buf, section, fragments);
    }
    buf
}

fn render_section(buf: &mut String, section: &PackageSection, fragments: &FragmentLoader) {
    let name = &section.name.display;

    buf.push_str(&format!("\n### {}\n", section.name.title()));
    buf.push_str(&format!("\n> Package `{}`\n\n", section.pkg_path));
    push_fragment(buf, fragments.load(FragmentKind::Start, name));

    push_line(buf, FENCE_OPEN);
    for group in &section.groups {
        push_line(buf, &format!("// source at {}", group.rel_path));
        for sig in &group.signatures {
            push_line(buf, &sig.text);
        }
    }
    push_line(buf, FENCE_CLOSE);

    push_fragment(buf, fragments.load(FragmentKind::End, name));
}

fn push_fragment(buf: &mut String, fragment: Option<String>) {
    if let Some(text) = fragment {
        push_line(buf, &text);
    }
}

fn push_line(buf: &mut String, line: &str) {
    buf.push_str(line);
    buf.push('\n');
}
