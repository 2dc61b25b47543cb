//! Implementation of the `strata scan` command.

use std::fs;

use strata_core::domain::scanner;

use crate::{
    cli::{ScanArgs, ScanFormat},
    error::{CliError, CliResult},
};

pub fn execute(args: ScanArgs) -> CliResult<()> {
    let Some(name) = args.file.file_stem().and_then(|s| s.to_str()) else {
        return Err(CliError::InvalidInput {
            message: format!(
                "'{}' has no usable file stem to derive a style name from",
                args.file.display()
            ),
        });
    };

    let text = fs::read_to_string(&args.file).map_err(|e| CliError::TemplateUnreadable {
        path: args.file.clone(),
        source: e,
    })?;

    let descriptor = scanner::scan(name, &text);

    match args.format {
        ScanFormat::Table => {
            println!("style:        {}", descriptor.name());
            println!("palette:      {}", descriptor.uses_palette());
            println!("named layer:  {}", descriptor.needs_named_layer());
            let roles: Vec<_> = descriptor
                .required_child_roles()
                .iter()
                .map(String::as_str)
                .collect();
            println!(
                "child roles:  {}",
                if roles.is_empty() {
                    "(none)".to_owned()
                } else {
                    roles.join(", ")
                }
            );
        }
        ScanFormat::Json => {
            let json =
                serde_json::to_string_pretty(&descriptor).unwrap_or_else(|_| "{}".into());
            println!("{json}");
        }
    }

    Ok(())
}
