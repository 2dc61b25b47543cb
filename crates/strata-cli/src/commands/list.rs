//! Implementation of the `strata list` command.

use strata_adapters::discover_styles;
use strata_core::domain::StyleDescriptor;

use crate::{
    cli::{ListArgs, ListFormat},
    error::CliResult,
};

pub fn execute(args: ListArgs) -> CliResult<()> {
    let styles = discover_styles(args.styles_dir.as_deref())?;

    match args.format {
        ListFormat::Table => {
            println!("Discovered styles ({}):", styles.len());
            for descriptor in styles.iter() {
                println!("  {}", describe(descriptor));
            }
        }
        ListFormat::Names => {
            for name in styles.names() {
                println!("{name}");
            }
        }
        ListFormat::Json => {
            // JSON goes straight to stdout so it stays parseable in pipes.
            let descriptors: Vec<&StyleDescriptor> = styles.iter().collect();
            let json = serde_json::to_string_pretty(&descriptors)
                .unwrap_or_else(|_| "[]".into());
            println!("{json}");
        }
    }

    Ok(())
}

/// One table row: name plus the descriptor flags that matter to an operator.
fn describe(descriptor: &StyleDescriptor) -> String {
    let mut parts = Vec::new();
    if descriptor.uses_palette() {
        parts.push("palette".to_owned());
    }
    if descriptor.needs_named_layer() {
        parts.push("named-layer".to_owned());
    }
    if !descriptor.required_child_roles().is_empty() {
        let roles: Vec<_> = descriptor
            .required_child_roles()
            .iter()
            .map(String::as_str)
            .collect();
        parts.push(format!("children: {}", roles.join(", ")));
    }
    if parts.is_empty() {
        descriptor.name().to_owned()
    } else {
        format!("{} ({})", descriptor.name(), parts.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn describe_names_the_flags() {
        let descriptor = StyleDescriptor::new(
            "vector",
            true,
            false,
            BTreeSet::from(["mag".to_owned(), "dir".to_owned()]),
        );
        let row = describe(&descriptor);
        assert!(row.starts_with("vector"));
        assert!(row.contains("palette"));
        assert!(row.contains("children: dir, mag"));
        assert!(!row.contains("named-layer"));
    }

    #[test]
    fn describe_plain_style_is_just_the_name() {
        let descriptor = StyleDescriptor::new("bare", false, false, BTreeSet::new());
        assert_eq!(describe(&descriptor), "bare");
    }
}
