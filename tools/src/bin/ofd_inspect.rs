//! Inspect the parts of an OFD package.
//!
//! Usage:
//!   ofd-inspect <file.ofd>                    list parts (XML parts marked)
//!   ofd-inspect <file.ofd> <internal/path>    dump one part, XML re-indented
//!   ofd-inspect <file.ofd> --grep <pattern>   search every XML part
//!   ofd-inspect <file.ofd> --pages            summarize parsed pages and resources

use std::io::{self, Write};

use ofdside_svg::package::{Package, Part};
use ofdside_svg::xml::XmlNode;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage:");
        eprintln!("  ofd-inspect <file.ofd>                    list parts");
        eprintln!("  ofd-inspect <file.ofd> <internal/path>    dump one part");
        eprintln!("  ofd-inspect <file.ofd> --grep <pattern>   search XML parts");
        eprintln!("  ofd-inspect <file.ofd> --pages            summarize the document");
        std::process::exit(1);
    }

    let data = std::fs::read(&args[1]).unwrap_or_else(|e| {
        eprintln!("Cannot open '{}': {e}", args[1]);
        std::process::exit(1);
    });
    let package = Package::from_bytes(&data).unwrap_or_else(|e| {
        eprintln!("Not a readable OFD package: {e}");
        std::process::exit(1);
    });

    match args.get(2).map(String::as_str) {
        None => list_parts(&package),
        Some("--grep") => {
            let pattern = args.get(3).unwrap_or_else(|| {
                eprintln!("--grep requires a pattern");
                std::process::exit(1);
            });
            grep_parts(&package, pattern);
        }
        Some("--pages") => summarize(&data),
        Some(path) => dump_part(&package, path),
    }
}

fn sorted_names(package: &Package) -> Vec<&str> {
    let mut names: Vec<&str> = package.names().collect();
    names.sort_unstable();
    names
}

fn list_parts(package: &Package) {
    println!("{:>9}  kind  path", "bytes");
    println!("{}", "-".repeat(55));
    for name in sorted_names(package) {
        let kind = match package.get(name) {
            Some(Part::Xml { .. }) => "xml ",
            _ => "bin ",
        };
        let size = package.bytes(name).map_or(0, <[u8]>::len);
        println!("{size:>9}  {kind}  {name}");
    }
    println!("{} parts", package.len());
}

fn dump_part(package: &Package, path: &str) {
    match package.get(path) {
        Some(Part::Xml { tree, .. }) => {
            let mut out = String::new();
            write_tree(tree, 0, &mut out);
            print!("{out}");
        }
        Some(Part::Binary(data)) => {
            io::stdout().write_all(data).unwrap();
        }
        None => {
            eprintln!("'{path}' not found in package");
            eprintln!("Run without a path argument to list available parts.");
            std::process::exit(1);
        }
    }
}

fn write_tree(node: &XmlNode, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    let attrs: String = node
        .attributes
        .iter()
        .map(|(k, v)| format!(" {k}=\"{v}\""))
        .collect();
    if node.is_text_only() {
        let text = node.text().unwrap_or_default();
        out.push_str(&format!("{indent}<{}{attrs}>{}</{}>\n", node.name, text.trim(), node.name));
        return;
    }
    out.push_str(&format!("{indent}<{}{attrs}>\n", node.name));
    for child in node.children() {
        write_tree(child, depth + 1, out);
    }
    out.push_str(&format!("{indent}</{}>\n", node.name));
}

fn grep_parts(package: &Package, pattern: &str) {
    let mut found = 0;
    for name in sorted_names(package) {
        if !matches!(package.get(name), Some(Part::Xml { .. })) {
            continue;
        }
        let Some(content) = package.text(name) else {
            continue;
        };
        for (n, line) in content.lines().enumerate() {
            if line.contains(pattern) {
                println!("{}:{}: {}", name, n + 1, line.trim());
                found += 1;
            }
        }
    }
    if found == 0 {
        eprintln!("No matches for '{pattern}'");
    }
}

fn summarize(data: &[u8]) {
    let parsed = ofdside_svg::parse_ofd_bytes(data).unwrap_or_else(|e| {
        eprintln!("Cannot parse package: {e}");
        std::process::exit(1);
    });
    let doc = &parsed.document;
    println!("doc root   {}", doc.doc_root);
    if let Some(title) = &doc.doc_info.title {
        println!("title      {title}");
    }
    println!("resources  {}", doc.resources.len());
    println!("templates  {}", doc.templates.len());
    println!("signatures {}", doc.signatures.len());
    for page in &doc.pages {
        let objects: usize = page
            .content
            .iter()
            .flatten()
            .map(|l| l.page_block.len())
            .sum();
        let seals = doc.page_signatures.get(&page.id).map_or(0, Vec::len);
        println!(
            "page {:>4}  {:>5} objects  {:>2} templates  {:>2} annots  {:>2} seals",
            page.id,
            objects,
            page.templates.len(),
            page.annots.len(),
            seals
        );
    }
}
