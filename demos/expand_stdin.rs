//! Reads a JSON document from stdin and prints the triples it expands to,
//! one per line, in the `SUBJ <PROP> OBJ .` shape of [`jsonld0::Triple`]'s
//! `Display` impl.

use std::io::{self, Read};

use anyhow::Context as _;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("reading document from stdin")?;
    let document: serde_json::Value =
        serde_json::from_str(&input).context("parsing stdin as JSON")?;

    for triple in jsonld0::expand(&document) {
        println!("{}", triple?);
    }
    Ok(())
}
