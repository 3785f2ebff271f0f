//! Detail block: what the dashboard shows in its modal for a single record.

use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq)]
pub struct Detail {
    pub title: String,
    pub fields: Vec<(&'static str, String)>,
    pub sections: Vec<Section>,
}

/// A titled group of entries below the field list (e.g. alert evidence).
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: String,
    pub entries: Vec<SectionEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionEntry {
    /// Bullet line above the body. Empty for a section with a single
    /// unlabelled document.
    pub heading: String,
    /// Pre-formatted body; rendered indented by two spaces per line.
    pub body: String,
}

impl Detail {
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", self.title)?;
        for (label, value) in &self.fields {
            writeln!(out, "{label}: {value}")?;
        }
        for section in &self.sections {
            writeln!(out)?;
            writeln!(out, "{}", section.title)?;
            if section.entries.is_empty() {
                writeln!(out, "  (none)")?;
            }
            for entry in &section.entries {
                if !entry.heading.is_empty() {
                    writeln!(out, "- {}", entry.heading)?;
                }
                for line in entry.body.lines() {
                    writeln!(out, "  {}", line.trim_end())?;
                }
            }
        }
        Ok(())
    }

    pub fn render_to_string(&self) -> String {
        let mut buf = Vec::new();
        self.render(&mut buf).expect("writing to a Vec cannot fail");
        String::from_utf8_lossy(&buf).into_owned()
    }
}
