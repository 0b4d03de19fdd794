use crate::error::Error;
use crate::model::Page;
use crate::namespace::strip_namespace;
use crate::xml::XmlNode;

use super::ParseContext;
use super::pages::read_page_part;

/// `CommonData/TemplatePage` -> `templates[ID]`.
pub(super) fn parse_template(ctx: &mut ParseContext, entry: &XmlNode) -> Result<(), Error> {
    let (Some(id), Some(base_loc)) = (entry.attribute("ID"), entry.attribute("BaseLoc")) else {
        return Err(Error::Structure {
            part: "TemplatePage",
            reason: "entry needs both ID and BaseLoc".into(),
        });
    };
    let path = ctx.doc_path(base_loc);
    let package = ctx.package;
    let xml = package
        .xml(&path)
        .ok_or_else(|| Error::NotFound(path.clone()))?;
    if strip_namespace(&xml.name) != "Page" {
        return Err(Error::Structure {
            part: "TemplatePage",
            reason: format!("{path} has root element {}", xml.name),
        });
    }
    let mut page = Page {
        id: id.trim().to_string(),
        ..Page::default()
    };
    read_page_part(ctx, &mut page, xml, &path);
    ctx.doc
        .templates
        .entry(page.id.clone())
        .or_default()
        .push(page);
    Ok(())
}
