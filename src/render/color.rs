use crate::geometry::{
    BLACK, Unit, cmyk_color, fmt_num, gray_color, normalize_alpha, parse_color, parse_numbers,
};
use crate::model::{AxialShading, ColorSpec, Resource, get_color_space};
use crate::svg::Element;

/// A resolved fill or stroke.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Paint {
    /// CSS color or `url(#id)`.
    pub(crate) color: String,
    pub(crate) opacity: Option<f64>,
}

impl Paint {
    pub(crate) fn black() -> Self {
        Paint {
            color: BLACK.to_string(),
            opacity: None,
        }
    }
}

/// Flat color, honoring `ColorSpace` type and palette `Index`.
pub(crate) fn flat_color(spec: &ColorSpec, res: &[Resource]) -> Paint {
    if let Some(first) = &spec.radial_fallback {
        return flat_color(first, res);
    }
    let space = spec.color_space.as_deref().and_then(|id| get_color_space(res, id));
    let value = match (&spec.index, space) {
        (Some(index), Some(space)) => index
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|i| space.palette.get(i))
            .map(String::as_str)
            .or(spec.value.as_deref()),
        _ => spec.value.as_deref(),
    };
    let channels = value.map(parse_numbers).unwrap_or_default();
    let color = match (space.map(|s| s.space_type.as_str()), channels.as_slice()) {
        (Some("GRAY"), [v, ..]) | (Some("Gray"), [v, ..]) => gray_color(*v),
        (Some("CMYK"), [c, m, y, k]) => cmyk_color(*c, *m, *y, *k),
        _ => parse_color(value),
    };
    Paint {
        color,
        opacity: spec.alpha.as_deref().and_then(normalize_alpha),
    }
}

/// `linearGradient` in the user space of the element that references it.
pub(crate) fn linear_gradient(
    id: &str,
    shading: &AxialShading,
    res: &[Resource],
    unit: Unit,
) -> Element {
    let start = parse_numbers(&shading.start_point);
    let end = parse_numbers(&shading.end_point);
    let coord = |v: &[f64], i: usize| fmt_num(unit.px(v.get(i).copied().unwrap_or(0.0)));
    let mut gradient = Element::new("linearGradient")
        .attr("id", id)
        .attr("gradientUnits", "userSpaceOnUse")
        .attr("x1", coord(&start, 0))
        .attr("y1", coord(&start, 1))
        .attr("x2", coord(&end, 0))
        .attr("y2", coord(&end, 1));
    if shading.extend.as_deref().is_some_and(|e| e != "0") {
        gradient.set_attr("spreadMethod", "pad");
    }
    let count = shading.segments.len();
    for (i, segment) in shading.segments.iter().enumerate() {
        let offset = segment.position.unwrap_or(if count > 1 {
            i as f64 / (count - 1) as f64
        } else {
            0.0
        });
        let paint = flat_color(&segment.color, res);
        let mut stop = Element::new("stop")
            .attr("offset", fmt_num(offset.clamp(0.0, 1.0)))
            .attr("stop-color", paint.color);
        if let Some(o) = paint.opacity {
            stop.set_attr("stop-opacity", fmt_num(o));
        }
        gradient.push(stop);
    }
    gradient
}
