//! HTML output for a [`FallbackImage`](crate::FallbackImage)

use std::fmt::{self, Write};

use crate::options::DisplayOptions;

/// Class on the wrapper element
pub const WRAPPER_CLASS: &str = "fallback-image";

/// Class on the pulsing overlay shown while loading
pub const PLACEHOLDER_CLASS: &str = "fallback-image__placeholder animate-pulse";

/// Attributes describing the primary source only. Browsers prefer `srcset`
/// over `src`, so these are withheld once the fallback is in use.
pub const PRIMARY_ONLY_ATTRIBUTES: [&str; 2] = ["srcset", "sizes"];

/// What the component puts on screen at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedImage<'a> {
    pub src: &'a str,
    pub alt: &'a str,
    /// Caller options; see [`forwarded_attributes`](Self::forwarded_attributes)
    pub attributes: &'a DisplayOptions,
    /// Overlay covering the image bounds
    pub show_placeholder: bool,
    /// `src` is the fallback rather than the primary source
    pub fallback_active: bool,
}

impl<'a> RenderedImage<'a> {
    /// Options as they reach the `<img>` element
    pub fn forwarded_attributes(&self) -> impl Iterator<Item = (&'a str, &'a str)> {
        let fallback_active = self.fallback_active;
        self.attributes.iter().filter(move |(key, _)| {
            !(fallback_active
                && PRIMARY_ONLY_ATTRIBUTES
                    .iter()
                    .any(|attr| attr.eq_ignore_ascii_case(key)))
        })
    }

    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RenderedImage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<div class="{}" style="position: relative">"#,
            WRAPPER_CLASS
        )?;

        f.write_str("<img src=\"")?;
        write_escaped(f, self.src)?;
        f.write_str("\" alt=\"")?;
        write_escaped(f, self.alt)?;
        f.write_char('"')?;
        for (key, value) in self.forwarded_attributes() {
            write!(f, " {}=\"", key)?;
            write_escaped(f, value)?;
            f.write_char('"')?;
        }
        f.write_char('>')?;

        if self.show_placeholder {
            write!(
                f,
                r#"<div class="{}" style="position: absolute; inset: 0" aria-hidden="true"></div>"#,
                PLACEHOLDER_CLASS
            )?;
        }

        f.write_str("</div>")
    }
}

fn write_escaped<W: Write>(out: &mut W, value: &str) -> fmt::Result {
    for c in value.chars() {
        match c {
            '&' => out.write_str("&amp;")?,
            '<' => out.write_str("&lt;")?,
            '>' => out.write_str("&gt;")?,
            '"' => out.write_str("&quot;")?,
            '\'' => out.write_str("&#39;")?,
            other => out.write_char(other)?,
        }
    }
    Ok(())
}
