// Copyright (c) Chris Gunn.
// Licensed under the MIT license.

// Literal find-and-replace over raw document bytes.


use std::borrow::Cow;

use anyhow::Error;
use regex::bytes::{NoExpand, Regex};

pub struct Patch {
    pattern: Regex,
    replacement: Vec<u8>,
}

pub struct Patched<'a> {
    pub content: Cow<'a, [u8]>,
    pub replacements: usize,
}

impl Patch {
    // Builds a patch whose pattern matches `find` character for character.
    pub fn literal(find: &str, replacement: &str) -> Result<Patch, Error> {
        let pattern = Regex::new(&regex::escape(find))?;
        Ok(Patch {
            pattern,
            replacement: replacement.as_bytes().to_vec(),
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    // Replaces every non-overlapping match, left to right.
    // The replacement is inserted as-is: `$name` is not a group reference.
    pub fn apply<'a>(&self, content: &'a [u8]) -> Patched<'a> {
        let replacements = self.pattern.find_iter(content).count();
        if replacements == 0 {
            return Patched {
                content: Cow::Borrowed(content),
                replacements,
            };
        }

        let content = self.pattern.replace_all(content, NoExpand(&self.replacement));
        Patched { content, replacements }
    }
}
