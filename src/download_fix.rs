// Copyright (c) Chris Gunn.
// Licensed under the MIT license.

// The S3 bootstrap download fix for the Mumbai spot-instance template.

#[cfg(test)]
mod tests;

use anyhow::Error;

use crate::patch::Patch;

pub const INPUT_TEMPLATE: &str = "mumbai-template-v2.yaml";
pub const OUTPUT_TEMPLATE: &str = "mumbai-template-v2-fixed.yaml";

// Single-shot download that fails the whole user-data script on a flaky network.
pub const FRAGILE_DOWNLOAD: &str = r#"curl --retry 5 --retry-delay 3 --retry-max-time 60 --connect-timeout 10 -o /tmp/user-data-script-s3copy.sh "https://s3.us-west-2.amazonaws.com/03-july-2025-qclvscodespot-4.14pm/user-data-script-s3copy-v2.sh""#;

// Waits for the network, then tries curl and wget up to three times each.
pub const ROBUST_DOWNLOAD: &str = r#"# Wait for network stability
                sleep 5
                
                # Robust download with curl and wget fallback
                DOWNLOADED=false
                for attempt in 1 2 3; do
                  log "Download attempt $attempt..."
                  if curl -f --max-time 30 -o /tmp/user-data-script-s3copy.sh "https://s3.us-west-2.amazonaws.com/03-july-2025-qclvscodespot-4.14pm/user-data-script-s3copy-v2.sh" 2>>/var/log/amazon-q-setup.log; then
                    DOWNLOADED=true
                    break
                  fi
                  if wget --timeout=30 -O /tmp/user-data-script-s3copy.sh "https://s3.us-west-2.amazonaws.com/03-july-2025-qclvscodespot-4.14pm/user-data-script-s3copy-v2.sh" 2>>/var/log/amazon-q-setup.log; then
                    DOWNLOADED=true
                    break
                  fi
                  sleep 3
                done
                
                if [ "$DOWNLOADED" != "true" ]; then
                  log "❌ Failed to download setup script after 3 attempts"
                  exit 1
                fi
                log "✅ Download successful""#;

pub fn download_fix() -> Result<Patch, Error> {
    Patch::literal(FRAGILE_DOWNLOAD, ROBUST_DOWNLOAD)
}
