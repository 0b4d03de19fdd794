mod common;

use common::*;
use std::io::Cursor;
use std::sync::Arc;

use base64::Engine;
use ofdside_svg::svg::Element;
use ofdside_svg::{
    BitonalCodec, MountTarget, OfdInput, ParsedOfd, RenderOptions, get_svg_doms, parse_ofd_bytes,
};

/// One millimetre per pixel on the 210 mm wide test pages.
fn mm_options() -> RenderOptions {
    RenderOptions {
        screen_width: Some(210.0),
        ..RenderOptions::default()
    }
}

fn render(builder: OfdBuilder, options: &RenderOptions) -> Element {
    parse_ofd_bytes(&builder.build()).expect("parse").render(options)
}

fn named<'a>(root: &'a Element, name: &str) -> Vec<&'a Element> {
    root.descendants().into_iter().filter(|e| e.name == name).collect()
}

fn with_class<'a>(root: &'a Element, class: &str) -> Vec<&'a Element> {
    root.descendants()
        .into_iter()
        .filter(|e| e.get_attr("class") == Some(class))
        .collect()
}

#[test]
fn minimal_document_renders_one_path() {
    let root = render(single_page(SIMPLE_PATH), &RenderOptions::default());
    assert_eq!(root.name, "div");
    assert_eq!(root.get_attr("class"), Some("ofd-document"));

    let paths = named(&root, "path");
    assert_eq!(paths.len(), 1);
    let d = paths[0].get_attr("d").unwrap();
    assert!(d.starts_with('M'), "{d}");
    assert!(d.ends_with('Z'), "{d}");
}

#[test]
fn millimetres_scale_to_pixels() {
    let root = render(single_page(SIMPLE_PATH), &mm_options());
    let page = with_class(&root, "ofd-page")[0];
    assert_eq!(page.get_attr("data-page-id"), Some("1"));
    let svg = page.elements().next().unwrap();
    assert_eq!(svg.get_attr("width"), Some("210"));
    assert_eq!(svg.get_attr("height"), Some("297"));

    let path = named(&root, "path")[0];
    assert_eq!(path.get_attr("d"), Some("M 0 0 C 10 10 20 20 30 30 Z"));
    assert_eq!(path.get_attr("fill"), Some("none"));
    assert_eq!(path.get_attr("stroke"), Some("rgb(0,0,0)"));
    assert_eq!(path.get_attr("stroke-width"), Some("0.353"));

    let placed = root
        .descendants()
        .into_iter()
        .find(|e| e.get_attr("data-type") == Some("PathObject"))
        .unwrap();
    assert_eq!(placed.get_attr("x"), Some("10"));
    assert_eq!(placed.get_attr("width"), Some("50"));

    let default = render(single_page(SIMPLE_PATH), &RenderOptions::default());
    let svg = with_class(&default, "ofd-page")[0].elements().next().unwrap();
    assert_eq!(svg.get_attr("width"), Some("793.7008"));
}

#[test]
fn path_ctm_becomes_transform() {
    let obj = r#"<ofd:PathObject ID="3" Boundary="0 0 50 50" CTM="1 0 0 1 2 3" Fill="true" Stroke="false" Rule="Even-Odd">
<ofd:FillColor Value="255 0 0" Alpha="128"/>
<ofd:AbbreviatedData>M 0 0 L 10 0 L 10 10 C</ofd:AbbreviatedData></ofd:PathObject>"#;
    let root = render(single_page(obj), &mm_options());
    let path = named(&root, "path")[0];
    assert_eq!(path.get_attr("transform"), Some("matrix(1 0 0 1 2 3)"));
    assert_eq!(path.get_attr("fill"), Some("rgb(255,0,0)"));
    assert_eq!(path.get_attr("fill-opacity"), Some("0.502"));
    assert_eq!(path.get_attr("fill-rule"), Some("evenodd"));
    assert_eq!(path.get_attr("stroke"), Some("none"));
}

#[test]
fn axial_shading_becomes_gradient() {
    let obj = r#"<ofd:PathObject ID="3" Boundary="0 0 50 50" Fill="true">
<ofd:FillColor><ofd:AxialShd StartPoint="0 0" EndPoint="50 0">
<ofd:Segment Position="0"><ofd:Color Value="255 0 0"/></ofd:Segment>
<ofd:Segment Position="1"><ofd:Color Value="0 0 255"/></ofd:Segment>
</ofd:AxialShd></ofd:FillColor>
<ofd:AbbreviatedData>S 0 0 L 50 0 L 50 50 C</ofd:AbbreviatedData></ofd:PathObject>"#;
    let root = render(single_page(obj), &mm_options());

    let gradients = named(&root, "linearGradient");
    assert_eq!(gradients.len(), 1);
    let id = gradients[0].get_attr("id").unwrap();
    assert_eq!(gradients[0].get_attr("x2"), Some("50"));
    let stops = named(gradients[0], "stop");
    assert_eq!(stops.len(), 2);
    assert_eq!(stops[1].get_attr("stop-color"), Some("rgb(0,0,255)"));

    let path = named(&root, "path")[0];
    assert_eq!(path.get_attr("fill"), Some(format!("url(#{id})").as_str()));
}

#[test]
fn draw_param_chain_supplies_stroke() {
    let res = res_xml(
        r#"<ofd:DrawParams>
<ofd:DrawParam ID="6" LineWidth="2"><ofd:StrokeColor Value="0 128 0"/></ofd:DrawParam>
<ofd:DrawParam ID="7" Relative="6" Join="Round"/>
<ofd:DrawParam ID="8" Relative="9"/>
<ofd:DrawParam ID="9" Relative="8"/>
</ofd:DrawParams>"#,
    );
    let objects = r#"<ofd:PathObject ID="3" Boundary="0 0 50 50" DrawParam="7"><ofd:AbbreviatedData>S 0 0 L 5 5</ofd:AbbreviatedData></ofd:PathObject>
<ofd:PathObject ID="4" Boundary="0 0 50 50" DrawParam="8"><ofd:AbbreviatedData>S 0 0 L 5 5</ofd:AbbreviatedData></ofd:PathObject>"#;
    let builder = single_page(objects)
        .file(
            "Doc_0/Document.xml",
            document_xml("<ofd:DocumentRes>DocumentRes.xml</ofd:DocumentRes>", &["1"], ""),
        )
        .file("Doc_0/DocumentRes.xml", res);
    let root = render(builder, &mm_options());

    let paths = named(&root, "path");
    assert_eq!(paths.len(), 2);
    assert_eq!(paths[0].get_attr("stroke"), Some("rgb(0,128,0)"));
    assert_eq!(paths[0].get_attr("stroke-linejoin"), Some("round"));
    // DrawParam 7 states no LineWidth of its own, so it keeps the default.
    assert_eq!(paths[0].get_attr("stroke-width"), Some("0.353"));
    assert_eq!(paths[1].get_attr("stroke"), Some("rgb(0,0,0)"));
}

#[test]
fn layers_stack_by_type() {
    let layers = format!(
        r#"<ofd:Layer ID="2" Type="Foreground">{SIMPLE_PATH}</ofd:Layer><ofd:Layer ID="4" Type="Background">{SIMPLE_PATH}</ofd:Layer><ofd:Layer ID="5">{SIMPLE_PATH}</ofd:Layer>"#
    );
    let builder = single_page("").file("Doc_0/Pages/Page_0/Content.xml", page_xml(&layers));
    let root = render(builder, &mm_options());
    let order: Vec<&str> = with_class(&root, "ofd-layer")
        .iter()
        .filter_map(|l| l.get_attr("data-layer"))
        .collect();
    assert_eq!(order, ["Background", "Body", "Foreground"]);
}

#[test]
fn templates_wrap_page_content() {
    let page = format!(
        r#"<ofd:Page {NS}><ofd:Template TemplateID="20"/><ofd:Template TemplateID="21" ZOrder="Foreground"/><ofd:Content>{}</ofd:Content></ofd:Page>"#,
        body_layer(SIMPLE_PATH)
    );
    let builder = single_page("")
        .file(
            "Doc_0/Document.xml",
            document_xml(
                r#"<ofd:TemplatePage ID="20" BaseLoc="Tpls/Tpl_0/Content.xml"/><ofd:TemplatePage ID="21" BaseLoc="Tpls/Tpl_1/Content.xml"/>"#,
                &["1"],
                "",
            ),
        )
        .file("Doc_0/Pages/Page_0/Content.xml", page)
        .file("Doc_0/Tpls/Tpl_0/Content.xml", page_xml(&body_layer(SIMPLE_PATH)))
        .file("Doc_0/Tpls/Tpl_1/Content.xml", page_xml(&body_layer(SIMPLE_PATH)));
    let root = render(builder, &mm_options());
    let sources: Vec<&str> = with_class(&root, "ofd-layer")
        .iter()
        .filter_map(|l| l.get_attr("data-source"))
        .collect();
    assert_eq!(sources, ["template", "page", "template"]);
}

#[test]
fn text_without_embedded_font_uses_text_elements() {
    let res = res_xml(r#"<ofd:Fonts><ofd:Font ID="5" FontName="SimSun" Serif="true"/></ofd:Fonts>"#);
    let obj = r#"<ofd:TextObject ID="3" Boundary="10 10 100 10" Font="5" Size="4" Weight="700">
<ofd:FillColor Value="0 0 255"/>
<ofd:TextCode X="0" Y="4" DeltaX="g 2 4">OFD</ofd:TextCode></ofd:TextObject>"#;
    let builder = single_page(obj)
        .file(
            "Doc_0/Document.xml",
            document_xml("<ofd:PublicRes>PublicRes.xml</ofd:PublicRes>", &["1"], ""),
        )
        .file("Doc_0/PublicRes.xml", res);
    let root = render(builder, &mm_options());

    let group = with_class(&root, "ofd-text")[0];
    assert_eq!(group.get_attr("font-family"), Some("'SimSun', serif"));
    assert_eq!(group.get_attr("font-size"), Some("4"));
    assert_eq!(group.get_attr("font-weight"), Some("bold"));
    assert_eq!(group.get_attr("fill"), Some("rgb(0,0,255)"));
    let glyphs = named(group, "text");
    let xs: Vec<&str> = glyphs.iter().filter_map(|g| g.get_attr("x")).collect();
    assert_eq!(xs, ["0", "4", "8"]);
}

const TRIANGLE_FONT: &str =
    r#"<ofd:Fonts><ofd:Font ID="5" FontName="Triangle"><ofd:FontFile>tri.ttf</ofd:FontFile></ofd:Font></ofd:Fonts>"#;

#[test]
fn embedded_font_draws_glyph_outlines() {
    let obj = r#"<ofd:TextObject ID="3" Boundary="10 10 100 10" Font="5" Size="10">
<ofd:CGTransform CodePosition="0" CodeCount="1" GlyphCount="1"><ofd:Glyphs>1</ofd:Glyphs></ofd:CGTransform>
<ofd:TextCode X="0" Y="8">A</ofd:TextCode></ofd:TextObject>"#;
    let root = render(page_with_res(obj, TRIANGLE_FONT, &[("tri.ttf", triangle_ttf().as_slice())]), &mm_options());

    assert!(with_class(&root, "ofd-text").is_empty());
    assert!(named(&root, "text").is_empty());
    let paths = named(&root, "path");
    assert_eq!(paths.len(), 1);
    // Glyph origin at (0, 8); the apex sits 700/1000 em above it.
    assert_eq!(paths[0].get_attr("d"), Some("M 0 8 L 5 8 L 2.5 1 L 0 8 Z"));
    assert_eq!(paths[0].get_attr("fill"), Some("rgb(0,0,0)"));
}

#[test]
fn oversized_cg_transform_still_renders() {
    let obj = r#"<ofd:TextObject ID="3" Boundary="10 10 100 10" Font="5" Size="10">
<ofd:CGTransform CodePosition="1" CodeCount="18446744073709551615" GlyphCount="1"><ofd:Glyphs>1</ofd:Glyphs></ofd:CGTransform>
<ofd:TextCode X="0" Y="8" DeltaX="g 4000000000 5">AB</ofd:TextCode></ofd:TextObject>"#;
    let root = render(page_with_res(obj, TRIANGLE_FONT, &[("tri.ttf", triangle_ttf().as_slice())]), &mm_options());
    let paths = named(&root, "path");
    assert_eq!(paths.len(), 1);
    // Only "B" has a glyph: it sits one 5 mm advance to the right.
    assert!(paths[0].get_attr("d").unwrap().starts_with("M 5 8 "));
}

#[test]
fn missing_font_file_falls_back_to_text() {
    let root = render(
        page_with_res(
            r#"<ofd:TextObject ID="3" Boundary="0 0 50 10" Font="5" Size="3"><ofd:TextCode X="0" Y="3">A</ofd:TextCode></ofd:TextObject>"#,
            TRIANGLE_FONT,
            &[],
        ),
        &mm_options(),
    );
    assert_eq!(named(&root, "text").len(), 1);
    assert!(named(&root, "path").is_empty());
}

fn filled(id: u32, color: &str) -> String {
    format!(
        r#"<ofd:PathObject ID="{id}" Boundary="0 0 10 10" Fill="true" Stroke="false">{color}<ofd:AbbreviatedData>S 0 0 L 10 10 C</ofd:AbbreviatedData></ofd:PathObject>"#
    )
}

#[test]
fn color_spaces_resolve_flat_colors() {
    let spaces = r#"<ofd:ColorSpaces>
<ofd:ColorSpace ID="12" Type="GRAY"/>
<ofd:ColorSpace ID="13" Type="CMYK"/>
<ofd:ColorSpace ID="14" Type="RGB"><ofd:Palette><ofd:CV>255 0 0</ofd:CV><ofd:CV>0 255 0</ofd:CV></ofd:Palette></ofd:ColorSpace>
</ofd:ColorSpaces>"#;
    let objects = [
        filled(3, r#"<ofd:FillColor ColorSpace="14" Index="1"/>"#),
        filled(4, r#"<ofd:FillColor ColorSpace="12" Value="128"/>"#),
        filled(5, r#"<ofd:FillColor ColorSpace="13" Value="0 255 255 0"/>"#),
        filled(
            6,
            r#"<ofd:FillColor><ofd:RadialShd StartPoint="0 0" EndPoint="5 5" StartRadius="0" EndRadius="5">
<ofd:Segment Position="0"><ofd:Color Value="0 0 255"/></ofd:Segment>
<ofd:Segment Position="1"><ofd:Color Value="255 255 255"/></ofd:Segment>
</ofd:RadialShd></ofd:FillColor>"#,
        ),
    ]
    .concat();
    let root = render(page_with_res(&objects, spaces, &[]), &mm_options());
    let fills: Vec<&str> = named(&root, "path")
        .iter()
        .filter_map(|p| p.get_attr("fill"))
        .collect();
    assert_eq!(
        fills,
        ["rgb(0,255,0)", "rgb(128,128,128)", "rgb(255,0,0)", "rgb(0,0,255)"]
    );
    assert!(named(&root, "radialGradient").is_empty());
}

fn media(id: u32, file: &str, format: Option<&str>) -> String {
    let format = format.map(|f| format!(r#" Format="{f}""#)).unwrap_or_default();
    format!(
        r#"<ofd:MultiMedias><ofd:MultiMedia ID="{id}" Type="Image"{format}><ofd:MediaFile>{file}</ofd:MediaFile></ofd:MultiMedia></ofd:MultiMedias>"#
    )
}

const IMAGE_OBJECT: &str = r#"<ofd:ImageObject ID="3" Boundary="0 0 20 10" ResourceID="9"/>"#;

fn decode_data_uri(href: &str) -> image::RgbaImage {
    let encoded = href
        .strip_prefix("data:image/png;base64,")
        .expect("png data uri");
    let png = base64::engine::general_purpose::STANDARD.decode(encoded).unwrap();
    image::load_from_memory(&png).unwrap().to_rgba8()
}

#[test]
fn bmp_is_reencoded_with_white_keyed_out() {
    let mut bmp = Vec::new();
    image::RgbImage::from_fn(2, 1, |x, _| {
        if x == 0 {
            image::Rgb([255, 255, 255])
        } else {
            image::Rgb([200, 0, 0])
        }
    })
    .write_to(&mut Cursor::new(&mut bmp), image::ImageFormat::Bmp)
    .unwrap();

    let root = render(
        page_with_res(IMAGE_OBJECT, &media(9, "scan.bmp", None), &[("scan.bmp", bmp.as_slice())]),
        &mm_options(),
    );
    let images = named(&root, "image");
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].get_attr("width"), Some("20"));
    let png = decode_data_uri(images[0].get_attr("href").unwrap());
    assert_eq!(png.get_pixel(0, 0).0[3], 0);
    assert_eq!(png.get_pixel(1, 0).0, [200, 0, 0, 255]);
}

struct SolidCodec;

impl BitonalCodec for SolidCodec {
    fn decode(&self, data: &[u8]) -> Option<image::GrayImage> {
        (data == b"JB2".as_slice()).then(|| image::GrayImage::from_pixel(3, 2, image::Luma([0])))
    }
}

#[test]
fn bitonal_images_go_through_the_codec() {
    let builder = || page_with_res(IMAGE_OBJECT, &media(9, "page.jb2", Some("GBIG2")), &[("page.jb2", b"JB2".as_slice())]);

    let options = RenderOptions {
        bitonal_codec: Some(Arc::new(SolidCodec)),
        ..mm_options()
    };
    let root = render(builder(), &options);
    let images = named(&root, "image");
    assert_eq!(images.len(), 1);
    let png = decode_data_uri(images[0].get_attr("href").unwrap());
    assert_eq!(png.dimensions(), (3, 2));
    assert_eq!(png.get_pixel(2, 1).0, [0, 0, 0, 255]);

    let root = render(builder(), &mm_options());
    assert!(named(&root, "image").is_empty());
}

#[test]
fn image_object_uses_unit_square_and_ctm() {
    let res = res_xml(
        r#"<ofd:MultiMedias><ofd:MultiMedia ID="9" Type="Image"><ofd:MediaFile>img_0.png</ofd:MediaFile></ofd:MultiMedia></ofd:MultiMedias>"#,
    );
    let obj = r#"<ofd:ImageObject ID="3" Boundary="10 20 40 30" CTM="40 0 0 30 0 0" ResourceID="9"/>"#;
    let builder = single_page(obj)
        .file(
            "Doc_0/Document.xml",
            document_xml("<ofd:DocumentRes>DocumentRes.xml</ofd:DocumentRes>", &["1"], ""),
        )
        .file("Doc_0/DocumentRes.xml", res)
        .file("Doc_0/Res/img_0.png", TINY_PNG);
    let root = render(builder, &mm_options());

    let images = named(&root, "image");
    assert_eq!(images.len(), 1);
    assert!(images[0].get_attr("href").unwrap().starts_with("data:image/png;base64,"));
    assert_eq!(images[0].get_attr("width"), Some("1"));
    assert_eq!(images[0].get_attr("transform"), Some("matrix(40 0 0 30 0 0)"));
}

#[test]
fn self_referencing_composite_terminates() {
    let res = res_xml(
        r#"<ofd:CompositeGraphicUnits><ofd:CompositeGraphicUnit ID="40" Width="10" Height="10"><ofd:Content>
<ofd:PathObject ID="41" Boundary="0 0 10 10"><ofd:AbbreviatedData>S 0 0 L 10 10</ofd:AbbreviatedData></ofd:PathObject>
<ofd:CompositeObject ID="42" Boundary="0 0 10 10" ResourceID="40"/>
</ofd:Content></ofd:CompositeGraphicUnit></ofd:CompositeGraphicUnits>"#,
    );
    let obj = r#"<ofd:CompositeObject ID="3" Boundary="10 10 10 10" CTM="2 0 0 2 0 0" ResourceID="40"/>"#;
    let builder = single_page(obj)
        .file(
            "Doc_0/Document.xml",
            document_xml("<ofd:DocumentRes>DocumentRes.xml</ofd:DocumentRes>", &["1"], ""),
        )
        .file("Doc_0/DocumentRes.xml", res);
    let root = render(builder, &mm_options());

    let composites = with_class(&root, "ofd-composite");
    assert_eq!(composites.len(), 1);
    assert_eq!(composites[0].get_attr("transform"), Some("matrix(2 0 0 2 0 0)"));
    assert_eq!(named(&root, "path").len(), 1);
}

#[test]
fn hidden_objects_are_skipped() {
    let obj = r#"<ofd:PathObject ID="3" Boundary="0 0 5 5" Visible="false"><ofd:AbbreviatedData>S 0 0 L 5 5</ofd:AbbreviatedData></ofd:PathObject>"#;
    let root = render(single_page(obj), &mm_options());
    assert!(named(&root, "path").is_empty());
}

#[test]
fn raster_seal_is_stamped() {
    let root = render(signed_page(&ses_signature("PNG", TINY_PNG)), &mm_options());
    let seals = with_class(&root, "ofd-seal");
    assert_eq!(seals.len(), 1);
    assert_eq!(seals[0].get_attr("x"), Some("100"));
    assert_eq!(seals[0].get_attr("data-signature-id"), Some("1"));
    let image = named(seals[0], "image")[0];
    assert!(image.get_attr("href").unwrap().starts_with("data:image/png;base64,"));
}

#[test]
fn nested_ofd_seal_renders_its_first_page() {
    let inner = single_page(SIMPLE_PATH).build();
    let root = render(signed_page(&ses_signature("ofd", &inner)), &mm_options());
    let seal = with_class(&root, "ofd-seal")[0];
    assert_eq!(named(seal, "path").len(), 1);
    assert_eq!(named(&root, "path").len(), 2);
    assert!(with_class(&root, "ofd-seal-placeholder").is_empty());
}

#[test]
fn nested_seal_past_depth_limit_is_a_placeholder() {
    let inner = single_page(SIMPLE_PATH).build();
    let options = RenderOptions {
        max_seal_depth: 0,
        ..mm_options()
    };
    let root = render(signed_page(&ses_signature("ofd", &inner)), &options);
    assert_eq!(with_class(&root, "ofd-seal-placeholder").len(), 1);
    assert_eq!(named(&root, "path").len(), 1);
}

#[test]
fn seal_inside_seal_stops_at_the_limit() {
    let innermost = single_page(SIMPLE_PATH).build();
    let middle = signed_page(&ses_signature("ofd", &innermost)).build();
    let options = RenderOptions {
        max_seal_depth: 1,
        ..mm_options()
    };
    let root = render(signed_page(&ses_signature("ofd", &middle)), &options);
    // Outer page and the middle seal draw; the innermost seal is replaced.
    assert_eq!(named(&root, "path").len(), 2);
    assert_eq!(with_class(&root, "ofd-seal-placeholder").len(), 1);
}

fn parsed() -> ParsedOfd {
    parse_ofd_bytes(&single_page(SIMPLE_PATH).build()).unwrap()
}

#[test]
fn mounts_into_content_element() {
    let ofd = parsed();
    let mut content = Element::new("div");
    let target = MountTarget {
        content: Some(&mut content),
        ..MountTarget::default()
    };
    let root = get_svg_doms(OfdInput::Ofd(&ofd), &RenderOptions::default(), target).unwrap();
    assert_eq!(content.elements().next(), Some(&root));
}

#[test]
fn mounts_by_id() {
    let ofd = parsed();
    let mut host = Element::new("body").child(Element::new("div").attr("id", "viewer"));
    let target = MountTarget {
        id: Some("viewer"),
        host: Some(&mut host),
        ..MountTarget::default()
    };
    get_svg_doms(OfdInput::Ofd(&ofd), &RenderOptions::default(), target).unwrap();
    let viewer = host.find_by_id("viewer").unwrap();
    assert_eq!(viewer.elements().count(), 1);

    let mut host = Element::new("body");
    let target = MountTarget {
        id: Some("viewer"),
        host: Some(&mut host),
        ..MountTarget::default()
    };
    let err = get_svg_doms(OfdInput::Ofd(&ofd), &RenderOptions::default(), target).unwrap_err();
    assert_eq!(err.code(), 404);
}

#[test]
fn content_and_id_together_are_rejected() {
    let ofd = parsed();
    let mut content = Element::new("div");
    let mut host = Element::new("body").child(Element::new("div").attr("id", "viewer"));
    let target = MountTarget {
        content: Some(&mut content),
        id: Some("viewer"),
        host: Some(&mut host),
    };
    let err = get_svg_doms(OfdInput::Ofd(&ofd), &RenderOptions::default(), target).unwrap_err();
    assert_eq!(err.code(), 500);
    assert!(content.children.is_empty());
}

#[test]
fn xml_render_mounts_like_ofd_output() {
    let mut content = Element::new("div");
    let target = MountTarget {
        content: Some(&mut content),
        ..MountTarget::default()
    };
    let tree = ofdside_svg::xml_render(
        ofdside_svg::XmlInput::Literal("<a><b>x</b></a>".into()),
        None,
        target,
    )
    .unwrap();
    assert_eq!(tree.get_attr("class"), Some("xml-document"));
    assert_eq!(content.children.len(), 1);

    let err = ofdside_svg::xml_render(
        ofdside_svg::XmlInput::Literal(String::new()),
        None,
        MountTarget::default(),
    )
    .unwrap_err();
    assert_eq!(err.code(), 400);
}
