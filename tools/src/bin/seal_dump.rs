//! Print the BER tree of a seal (`SignedValue.dat`) and what the seal
//! walker makes of it.
//!
//! Usage:
//!   seal-dump <SignedValue.dat>
//!   seal-dump <file.ofd> <internal/path>

use std::fs;
use std::io::Read;

use ofdside_svg::asn1::{self, Asn1Node};
use ofdside_svg::{oid, seal};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let bytes = match args.len() {
        2 => fs::read(&args[1]).unwrap_or_else(|e| {
            eprintln!("Cannot read '{}': {e}", args[1]);
            std::process::exit(1);
        }),
        3 => read_entry(&args[1], args[2].trim_start_matches('/')),
        _ => {
            eprintln!("Usage:");
            eprintln!("  seal-dump <SignedValue.dat>");
            eprintln!("  seal-dump <file.ofd> <internal/path>");
            std::process::exit(1);
        }
    };

    let root = asn1::decode(&bytes).unwrap_or_else(|e| {
        eprintln!("Not a BER structure: {e}");
        std::process::exit(1);
    });
    print!("{}", asn1::dump(&root, &bytes));

    println!();
    match seal::extract_picture(&bytes) {
        Ok(picture) => {
            let size = picture.data.as_ref().map_or(0, Vec::len);
            println!(
                "picture: type={} bytes={} width={} height={}",
                picture.pic_type, size, picture.width, picture.height
            );
        }
        Err(e) => println!("picture: none ({e})"),
    }
    print_oids(&root, &bytes);
}

fn print_oids(node: &Asn1Node, bytes: &[u8]) {
    if node.tag.is_universal(6)
        && let Some(id) = asn1::decode_oid(node.content(bytes))
    {
        let name = oid::lookup(&id).map_or("?", |info| info.d);
        println!("oid {id}  {name}");
    }
    for child in &node.sub {
        print_oids(child, bytes);
    }
}

fn read_entry(path: &str, entry: &str) -> Vec<u8> {
    let file = fs::File::open(path).unwrap_or_else(|e| {
        eprintln!("Cannot open '{path}': {e}");
        std::process::exit(1);
    });
    let mut archive = zip::ZipArchive::new(file).unwrap_or_else(|e| {
        eprintln!("Not a valid ZIP/OFD: {e}");
        std::process::exit(1);
    });
    let mut entry = archive.by_name(entry).unwrap_or_else(|_| {
        eprintln!("'{entry}' not found in archive");
        std::process::exit(1);
    });
    let mut content = Vec::new();
    entry.read_to_end(&mut content).unwrap();
    content
}
