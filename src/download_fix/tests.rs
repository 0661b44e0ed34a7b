use super::*;

#[test]
fn fixes_the_curl_line_in_a_user_data_script() {
    let template = format!(
        "UserData:\n  Fn::Base64: |\n    #!/bin/bash\n    {}\n    bash /tmp/user-data-script-s3copy.sh\n",
        FRAGILE_DOWNLOAD
    );

    let patch = download_fix().unwrap();
    let patched = patch.apply(template.as_bytes());
    let output = std::str::from_utf8(&patched.content).unwrap();

    assert_eq!(patched.replacements, 1);
    assert!(!output.contains(FRAGILE_DOWNLOAD));
    assert_eq!(output.matches(ROBUST_DOWNLOAD).count(), 1);
    assert!(output.starts_with("UserData:\n  Fn::Base64: |\n    #!/bin/bash\n    # Wait for network stability\n"));
    assert!(output.ends_with("log \"✅ Download successful\"\n    bash /tmp/user-data-script-s3copy.sh\n"));
}

#[test]
fn dotted_host_must_match_exactly() {
    let near_miss = FRAGILE_DOWNLOAD.replace("s3.us-west-2", "s3-us-west-2");

    let patch = download_fix().unwrap();
    assert_eq!(patch.apply(near_miss.as_bytes()).replacements, 0);
}

#[test]
fn shell_variables_survive() {
    let patch = download_fix().unwrap();
    let patched = patch.apply(FRAGILE_DOWNLOAD.as_bytes());
    let output = std::str::from_utf8(&patched.content).unwrap();

    assert_eq!(output, ROBUST_DOWNLOAD);
    assert!(output.contains("log \"Download attempt $attempt...\""));
    assert!(output.contains("if [ \"$DOWNLOADED\" != \"true\" ]; then"));
}

#[test]
fn replacement_does_not_reintroduce_pattern() {
    assert!(!ROBUST_DOWNLOAD.contains(FRAGILE_DOWNLOAD));
}
