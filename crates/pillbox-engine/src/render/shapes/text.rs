use std::fmt::Write as _;

use crate::scene::shapes::TextCmd;

use super::{escape_xml, fill_attrs, num};

pub(crate) fn write(out: &mut String, cmd: &TextCmd) {
    if cmd.text.is_empty() || cmd.color.a <= 0.0 || !cmd.origin.is_finite() {
        return;
    }
    let family = cmd
        .family
        .as_deref()
        .map(|f| format!(r#" font-family="{}""#, escape_xml(f)))
        .unwrap_or_default();
    let _ = writeln!(
        out,
        r#"<text x="{}" y="{}" font-size="{}"{family}{} xml:space="preserve">{}</text>"#,
        num(cmd.origin.x),
        num(cmd.origin.y + cmd.baseline),
        num(cmd.size),
        fill_attrs(cmd.color),
        escape_xml(&cmd.text),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    fn cmd(text: &str, family: Option<&str>) -> TextCmd {
        TextCmd {
            text: text.into(),
            family: family.map(Into::into),
            size: 16.0,
            color: Color::black(),
            origin: Vec2::new(4.0, 10.0),
            extent: Vec2::new(40.0, 19.2),
            baseline: 14.4,
        }
    }

    #[test]
    fn baseline_offsets_y_and_family_passes_through() {
        let mut out = String::new();
        write(&mut out, &cmd("Third Line", Some("Proxima Nova Semibold")));
        assert!(out.contains(r#"x="4" y="24.4""#));
        assert!(out.contains(r#"font-family="Proxima Nova Semibold""#));
        assert!(out.contains(">Third Line</text>"));
    }

    #[test]
    fn markup_is_escaped() {
        let mut out = String::new();
        write(&mut out, &cmd("<b>&</b>", None));
        assert!(out.contains("&lt;b&gt;&amp;&lt;/b&gt;"));
        assert!(!out.contains("font-family"));
    }

    #[test]
    fn empty_text_writes_nothing() {
        let mut out = String::new();
        write(&mut out, &cmd("", None));
        assert!(out.is_empty());
    }
}
