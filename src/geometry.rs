//! Unit conversion, boxes, transforms and the small OFD mini-languages
//! (glyph deltas and abbreviated path data).

/// CSS reference pixel density: 96 px per inch.
pub const DEFAULT_PIXELS_PER_MM: f64 = 96.0 / 25.4;

/// mm -> px scale supplied by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Unit {
    pub pixels_per_mm: f64,
}

impl Default for Unit {
    fn default() -> Self {
        Unit {
            pixels_per_mm: DEFAULT_PIXELS_PER_MM,
        }
    }
}

impl Unit {
    pub fn new(pixels_per_mm: f64) -> Self {
        Unit { pixels_per_mm }
    }

    pub fn px(&self, mm: f64) -> f64 {
        mm * self.pixels_per_mm
    }
}

/// Pixel-space rectangle with a non-negative origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PixelBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Raw `x y w h` in millimetres.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StBox {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

pub fn parse_numbers(s: &str) -> Vec<f64> {
    s.split_whitespace()
        .filter_map(|t| t.parse::<f64>().ok())
        .collect()
}

pub fn parse_st_box(s: &str) -> Option<StBox> {
    let n = parse_numbers(s);
    if n.len() < 4 {
        return None;
    }
    Some(StBox {
        x: n[0],
        y: n[1],
        w: n[2],
        h: n[3],
    })
}

/// Convert an `x y w h` box to pixels. A negative extent means the box grows
/// left/up from its anchor, so the origin is shifted by it.
pub fn format_box(st_box: &str, unit: Unit, normalize_negatives: bool) -> Option<PixelBox> {
    let b = parse_st_box(st_box)?;
    let mut left = b.x;
    let mut top = b.y;
    let mut width = b.w;
    let mut height = b.h;
    if width < 0.0 {
        left += width;
    }
    if height < 0.0 {
        top += height;
    }
    if normalize_negatives {
        width = width.abs();
        height = height.abs();
    }
    Some(PixelBox {
        left: unit.px(left),
        top: unit.px(top),
        width: unit.px(width),
        height: unit.px(height),
    })
}

/// `[a b c d e f]`; identity when absent.
pub type Ctm = [f64; 6];

pub const IDENTITY: Ctm = [1.0, 0.0, 0.0, 1.0, 0.0, 0.0];

pub fn parse_ctm(s: &str) -> Option<Ctm> {
    let n = parse_numbers(s);
    if n.len() < 6 {
        return None;
    }
    Some([n[0], n[1], n[2], n[3], n[4], n[5]])
}

pub fn apply_ctm(x: f64, y: f64, ctm: &Ctm) -> (f64, f64) {
    (
        x * ctm[0] + y * ctm[2] + ctm[4],
        x * ctm[1] + y * ctm[3] + ctm[5],
    )
}

/// Like [`apply_ctm`] without the translation, for relative offsets.
pub fn apply_ctm_delta(dx: f64, dy: f64, ctm: &Ctm) -> (f64, f64) {
    (dx * ctm[0] + dy * ctm[2], dx * ctm[1] + dy * ctm[3])
}

/// `outer ∘ inner`: apply `inner` first, then `outer`.
pub fn multiply(inner: &Ctm, outer: &Ctm) -> Ctm {
    [
        inner[0] * outer[0] + inner[1] * outer[2],
        inner[0] * outer[1] + inner[1] * outer[3],
        inner[2] * outer[0] + inner[3] * outer[2],
        inner[2] * outer[1] + inner[3] * outer[3],
        inner[4] * outer[0] + inner[5] * outer[2] + outer[4],
        inner[4] * outer[1] + inner[5] * outer[3] + outer[5],
    ]
}

/// Rotation of the CTM's x axis, in degrees.
pub fn rotation_degrees(ctm: &Ctm) -> f64 {
    ctm[1].atan2(ctm[0]).to_degrees()
}

/// SVG `matrix(...)` with the translation converted to px.
pub fn svg_matrix(ctm: &Ctm, unit: Unit) -> String {
    format!(
        "matrix({} {} {} {} {} {})",
        fmt_num(ctm[0]),
        fmt_num(ctm[1]),
        fmt_num(ctm[2]),
        fmt_num(ctm[3]),
        fmt_num(unit.px(ctm[4])),
        fmt_num(unit.px(ctm[5]))
    )
}

/// Expand an OFD `DeltaX`/`DeltaY` string.
///
/// Tokens are plain advances or `g <count> <value>` runs. When the result is
/// one shorter than the `text_len - 1` advances a run needs, the last step is
/// extrapolated from the last two values.
pub fn expand_delta_positions(delta: &str, text_len: usize) -> Vec<f64> {
    let tokens: Vec<&str> = delta.split_whitespace().collect();
    let mut out = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        if tokens[i] == "g" {
            let count = tokens.get(i + 1).and_then(|t| t.parse::<usize>().ok());
            let value = tokens.get(i + 2).and_then(|t| t.parse::<f64>().ok());
            if let (Some(count), Some(value)) = (count, value) {
                // A run never needs more advances than the text has gaps.
                let room = text_len.saturating_sub(1).saturating_sub(out.len());
                out.extend(std::iter::repeat_n(value, count.min(room)));
            }
            i += 3;
        } else {
            if let Ok(v) = tokens[i].parse::<f64>() {
                out.push(v);
            }
            i += 1;
        }
    }
    if text_len >= 2 && !out.is_empty() && out.len() + 2 == text_len {
        let last = out[out.len() - 1];
        let next = match out.len() {
            1 => last,
            n => last + (last - out[n - 2]),
        };
        out.push(next);
    }
    out
}

#[derive(Clone, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(f64, f64),
    LineTo(f64, f64),
    QuadTo(f64, f64, f64, f64),
    CubicTo(f64, f64, f64, f64, f64, f64),
    Arc {
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    },
    Close,
}

/// Tokenize `AbbreviatedData` (`S`/`M`, `L`, `Q`, `B`, `A`, `C`). Unknown
/// operators and short operand lists are skipped.
pub fn parse_abbreviated_path(data: &str) -> Vec<PathCommand> {
    let tokens: Vec<&str> = data.split_whitespace().collect();
    let mut out = Vec::new();
    let mut i = 0;
    let nums = |from: usize, n: usize| -> Option<Vec<f64>> {
        let slice = tokens.get(from..from + n)?;
        slice.iter().map(|t| t.parse::<f64>().ok()).collect()
    };
    while i < tokens.len() {
        let op = tokens[i];
        let arity = match op {
            "S" | "M" | "L" => 2,
            "Q" => 4,
            "B" => 6,
            "A" => 7,
            "C" => 0,
            _ => {
                i += 1;
                continue;
            }
        };
        let Some(v) = nums(i + 1, arity) else {
            log::debug!("Truncated path operator {op} at token {i}");
            break;
        };
        out.push(match op {
            "S" | "M" => PathCommand::MoveTo(v[0], v[1]),
            "L" => PathCommand::LineTo(v[0], v[1]),
            "Q" => PathCommand::QuadTo(v[0], v[1], v[2], v[3]),
            "B" => PathCommand::CubicTo(v[0], v[1], v[2], v[3], v[4], v[5]),
            "A" => PathCommand::Arc {
                rx: v[0],
                ry: v[1],
                rotation: v[2],
                large_arc: v[3] != 0.0,
                sweep: v[4] != 0.0,
                x: v[5],
                y: v[6],
            },
            _ => PathCommand::Close,
        });
        i += 1 + arity;
    }
    out
}

/// SVG path data equivalent of `AbbreviatedData`, converted to px.
pub fn expand_abbreviated_path(data: &str, unit: Unit) -> String {
    let p = |v: f64| fmt_num(unit.px(v));
    let parts: Vec<String> = parse_abbreviated_path(data)
        .into_iter()
        .map(|cmd| match cmd {
            PathCommand::MoveTo(x, y) => format!("M {} {}", p(x), p(y)),
            PathCommand::LineTo(x, y) => format!("L {} {}", p(x), p(y)),
            PathCommand::QuadTo(x1, y1, x, y) => {
                format!("Q {} {} {} {}", p(x1), p(y1), p(x), p(y))
            }
            PathCommand::CubicTo(x1, y1, x2, y2, x, y) => format!(
                "C {} {} {} {} {} {}",
                p(x1),
                p(y1),
                p(x2),
                p(y2),
                p(x),
                p(y)
            ),
            PathCommand::Arc {
                rx,
                ry,
                rotation,
                large_arc,
                sweep,
                x,
                y,
            } => format!(
                "A {} {} {} {} {} {} {}",
                p(rx),
                p(ry),
                fmt_num(rotation),
                u8::from(large_arc),
                u8::from(sweep),
                p(x),
                p(y)
            ),
            PathCommand::Close => "Z".to_string(),
        })
        .collect();
    parts.join(" ")
}

pub const BLACK: &str = "rgb(0,0,0)";

/// CSS color for an OFD `Value`: `#RRGGBB`, per-channel `#RR #GG #BB`,
/// `R G B`, a single gray level or `C M Y K`. Absent means black.
pub fn parse_color(value: Option<&str>) -> String {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return BLACK.to_string();
    };
    if value.starts_with('#') && value.matches('#').count() == 1 {
        return value.chars().filter(|c| !c.is_whitespace()).collect();
    }
    let channels: Vec<f64> = value
        .split_whitespace()
        .filter_map(|t| match t.strip_prefix('#') {
            Some(hex) => u32::from_str_radix(hex, 16).ok().map(f64::from),
            None => t.parse::<f64>().ok(),
        })
        .collect();
    match channels.as_slice() {
        [v] => gray_color(*v),
        [r, g, b] => rgb(*r, *g, *b),
        [c, m, y, k] => cmyk_color(*c, *m, *y, *k),
        _ => BLACK.to_string(),
    }
}

pub fn rgb(r: f64, g: f64, b: f64) -> String {
    let c = |v: f64| v.clamp(0.0, 255.0).round() as u8;
    format!("rgb({},{},{})", c(r), c(g), c(b))
}

pub fn gray_color(v: f64) -> String {
    rgb(v, v, v)
}

/// Components on the 0–255 scale.
pub fn cmyk_color(c: f64, m: f64, y: f64, k: f64) -> String {
    let f = |v: f64| 1.0 - (v / 255.0).clamp(0.0, 1.0);
    rgb(
        255.0 * f(c) * f(k),
        255.0 * f(m) * f(k),
        255.0 * f(y) * f(k),
    )
}

/// `Alpha` is written either as 0–255 or as 0–1; both map to an opacity.
pub fn normalize_alpha(value: &str) -> Option<f64> {
    let v = value.trim().parse::<f64>().ok()?;
    let v = if v > 1.0 { v / 255.0 } else { v };
    Some(v.clamp(0.0, 1.0))
}

/// Shortest decimal form, at most four fractional digits.
pub fn fmt_num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let s = format!("{:.4}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncated_operator_stops_parsing() {
        let cmds = parse_abbreviated_path("M 0 0 L 5");
        assert_eq!(cmds, vec![PathCommand::MoveTo(0.0, 0.0)]);
    }

    #[test]
    fn unknown_operator_is_skipped() {
        let cmds = parse_abbreviated_path("S 1 2 X L 3 4 C");
        assert_eq!(
            cmds,
            vec![
                PathCommand::MoveTo(1.0, 2.0),
                PathCommand::LineTo(3.0, 4.0),
                PathCommand::Close
            ]
        );
    }

    #[test]
    fn negative_extent_moves_origin() {
        let b = format_box("10 10 -5 20", Unit::new(1.0), true).unwrap();
        assert_eq!((b.left, b.top, b.width, b.height), (5.0, 10.0, 5.0, 20.0));
        let b = format_box("10 10 -5 20", Unit::new(1.0), false).unwrap();
        assert_eq!(b.width, -5.0);
    }

    #[test]
    fn ctm_translates() {
        assert_eq!(apply_ctm(1.0, 1.0, &[1.0, 0.0, 0.0, 1.0, 10.0, 10.0]), (11.0, 11.0));
        assert_eq!(apply_ctm_delta(1.0, 1.0, &[2.0, 0.0, 0.0, 2.0, 10.0, 10.0]), (2.0, 2.0));
    }

    #[test]
    fn delta_groups_expand() {
        assert_eq!(expand_delta_positions("g 3 5 7", 5), vec![5.0, 5.0, 5.0, 7.0]);
    }

    #[test]
    fn oversized_delta_group_is_clamped() {
        assert_eq!(expand_delta_positions("g 4000000000 1", 3), vec![1.0, 1.0]);
        assert_eq!(expand_delta_positions("g 18446744073709551615 2 5", 4), vec![2.0, 2.0, 2.0, 5.0]);
        assert!(expand_delta_positions("g 10 1", 1).is_empty());
    }

    #[test]
    fn one_short_delta_list_is_extrapolated() {
        assert_eq!(expand_delta_positions("2 3", 4), vec![2.0, 3.0, 4.0]);
        assert_eq!(expand_delta_positions("4", 3), vec![4.0, 4.0]);
        assert_eq!(expand_delta_positions("2 3", 3), vec![2.0, 3.0]);
    }

    #[test]
    fn fmt_num_trims() {
        assert_eq!(fmt_num(1.50000), "1.5");
        assert_eq!(fmt_num(2.0), "2");
        assert_eq!(fmt_num(-0.00001), "0");
    }
}
