// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of glyphtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! glyphtree CLI entrypoint.
//!
//! Reads a JSON tree from a file (or stdin) and prints it as ASCII art. `--demo` prints the
//! built-in sample tree instead.

use std::error::Error;
use std::io::{Read, Write};

use glyphtree::layout::LayoutOptions;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<tree.json> | -] [--node-gap <n>] [--depth-gap <n>]\n  {program} --demo [--node-gap <n>] [--depth-gap <n>]\n\nThe tree is JSON: {{\"value\": \"1\", \"left\": {{..}}, \"right\": {{..}}}}; `null` is the empty tree.\nWithout a path (or with `-`) the tree is read from stdin.\n--demo renders a built-in sample tree and cannot be combined with a path."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    input: Option<String>,
    node_gap: Option<usize>,
    depth_gap: Option<usize>,
}

impl CliOptions {
    fn layout_options(&self) -> LayoutOptions {
        let defaults = LayoutOptions::default();
        LayoutOptions {
            node_gap: self.node_gap.unwrap_or(defaults.node_gap),
            depth_gap: self.depth_gap.unwrap_or(defaults.depth_gap),
        }
    }
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--node-gap" => {
                if options.node_gap.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.node_gap = Some(raw.parse().map_err(|_| ())?);
            }
            "--depth-gap" => {
                if options.depth_gap.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.depth_gap = Some(raw.parse().map_err(|_| ())?);
            }
            _ if arg.starts_with('-') && arg != "-" => return Err(()),
            _ => {
                if options.input.is_some() {
                    return Err(());
                }
                options.input = Some(arg);
            }
        }
    }

    if options.demo && options.input.is_some() {
        return Err(());
    }

    Ok(options)
}

fn read_input(input: Option<&str>) -> std::io::Result<String> {
    match input {
        None | Some("-") => {
            let mut src = String::new();
            std::io::stdin().read_to_string(&mut src)?;
            Ok(src)
        }
        Some(path) => std::fs::read_to_string(path),
    }
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "glyphtree".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let tree = if options.demo {
            Some(glyphtree::model::fixtures::sample_tree())
        } else {
            let src = read_input(options.input.as_deref())?;
            glyphtree::parse_tree_json(&src)?
        };

        let rendered =
            glyphtree::render_tree_with_options(tree.as_ref(), options.layout_options())?;

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(rendered.as_bytes())?;
        stdout.flush()?;
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("glyphtree: {err}");
        std::process::exit(1);
    }
}
