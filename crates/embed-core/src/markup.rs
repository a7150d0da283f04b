//! Markup generation
//!
//! Four mutually exclusive fragment shapes: the plain object/embed pair,
//! the aligned thumbnail wrapper around it, and the service-supplied
//! extern clause in plain and aligned form. Builders are typed; only the
//! per-service templates from configuration use string substitution.

use crate::dimensions::ResolvedDimensions;

/// Substitute named `$placeholder` values in a configuration template.
///
/// Unknown placeholders are left untouched so a typo in host
/// configuration stays visible in the rendered page.
pub fn substitute(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in values {
        out = out.replace(&format!("${name}"), value);
    }
    out
}

/// Generic embed markup at the resolved size.
///
/// One fixed legacy shape: an `object` element wrapping a transparent
/// flash `embed` of the substituted URL.
pub fn video_object(url: &str, dims: &ResolvedDimensions) -> String {
    format!(
        "<object width=\"{w}\" height=\"{h}\">\
         <param name=\"movie\" value=\"{url}\"></param>\
         <param name=\"wmode\" value=\"transparent\"></param>\
         <embed src=\"{url}\" type=\"application/x-shockwave-flash\" \
         wmode=\"transparent\" width=\"{w}\" height=\"{h}\"></embed>\
         </object>",
        w = dims.width,
        h = dims.height,
    )
}

/// Aligned thumbnail wrapper around an already-built embed fragment.
///
/// The caption block is present only when a caption was given. Caption
/// text is trusted markup and is inserted verbatim; the alignment token
/// is echoed into the class name as written.
pub fn thumb_container(inner: &str, align: &str, caption: Option<&str>, width: u32) -> String {
    let caption = caption
        .map(|text| format!("<div class=\"thumbcaption\">{text}</div>"))
        .unwrap_or_default();
    format!(
        "<div class=\"thumb t{align}\">\
         <div class=\"thumbinner\" style=\"width: {width}px;\">\
         {inner}{caption}\
         </div></div>"
    )
}
