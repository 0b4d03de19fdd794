use crate::geometry::{expand_abbreviated_path, parse_ctm, svg_matrix};
use crate::model::PathObject;
use crate::svg::Element;

use super::{Renderer, apply_alpha};

impl Renderer<'_> {
    /// `<path>` in the object's boundary space; the CTM becomes a transform.
    pub(super) fn render_path(&mut self, path: &PathObject, layer_param: Option<&str>) -> Option<Element> {
        let d = expand_abbreviated_path(&path.abbreviated_data, self.unit);
        if d.is_empty() {
            log::debug!("PathObject {:?} has no drawable data", path.common.id);
            return None;
        }
        let style = self.resolve_style(&path.common, layer_param);
        let mut el = Element::new("path").attr("d", d);
        if let Some(ctm) = path.common.ctm.as_deref().and_then(parse_ctm) {
            el.set_attr("transform", svg_matrix(&ctm, self.unit));
        }

        if path.fill.unwrap_or(false) {
            let spec = path.fill_color.as_ref().or(style.fill.as_ref());
            self.apply_fill(&mut el, spec);
            if path.rule.as_deref() == Some("Even-Odd") {
                el.set_attr("fill-rule", "evenodd");
            }
        } else {
            el.set_attr("fill", "none");
        }

        if path.stroke.unwrap_or(true) {
            let spec = path.stroke_color.as_ref().or(style.stroke.as_ref());
            self.apply_stroke(&mut el, spec, &style);
        } else {
            el.set_attr("stroke", "none");
        }

        apply_alpha(&mut el, &path.common);
        Some(el)
    }
}
