// Copyright (c) Chris Gunn.
// Licensed under the MIT license.


use std::{fs, path::Path};

use anyhow::{Context, Error};
use log::debug;

use crate::patch::{Patch, Patched};

pub fn process_template<'a>(template: &'a [u8], patch: &Patch) -> Patched<'a> {
    let patched = patch.apply(template);
    debug!("replaced {} occurrence(s) of /{}/", patched.replacements, patch.pattern());
    patched
}

// Reads all of `input`, patches it and writes the result to `output`, replacing any existing file.
// Returns the number of replacements made.
pub fn process_template_file(input: &Path, output: &Path, patch: &Patch) -> Result<usize, Error> {
    let template = fs::read(input).with_context(|| format!("failed to read template {}", input.display()))?;
    debug!("read {} bytes from {}", template.len(), input.display());

    let patched = process_template(&template, patch);

    fs::write(output, &patched.content).with_context(|| format!("failed to write {}", output.display()))?;
    debug!("wrote {} bytes to {}", patched.content.len(), output.display());

    Ok(patched.replacements)
}
